//! Theme, table, loyalty, and tracking commands.

use std::io::Write;

use resto_storefront::demo::{self, LoyaltyAccount, Reward};
use resto_storefront::preferences;
use resto_storefront::views::text;

use super::{App, CliError};

pub fn show_theme(app: &App, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "Theme: {}", preferences::load_theme(&app.storage))?;
    Ok(())
}

pub fn toggle_theme(app: &App, out: &mut impl Write) -> Result<(), CliError> {
    let theme = preferences::toggle_theme(&app.storage)?;
    writeln!(out, "Theme: {theme}")?;
    Ok(())
}

/// Simulate scanning a table code and remember the table.
pub fn scan_table(app: &App, out: &mut impl Write) -> Result<(), CliError> {
    let table = demo::scan_table(&app.storage)?;
    writeln!(out, "Table {} ({}, seats {})", table.number, table.section, table.capacity)?;
    writeln!(out, "Menu: {}", table.menu_link())?;
    Ok(())
}

pub fn show_points(app: &App, out: &mut impl Write) -> Result<(), CliError> {
    let account = LoyaltyAccount::new(&app.storage);
    writeln!(out, "Points: {}", account.points())?;
    Ok(())
}

pub fn redeem(app: &App, reward: Reward, cost: u32, out: &mut impl Write) -> Result<(), CliError> {
    let account = LoyaltyAccount::new(&app.storage);
    let remaining = account.redeem(reward, cost)?;
    writeln!(out, "{}", reward.message())?;
    writeln!(out, "Points: {remaining}")?;
    Ok(())
}

/// Show a simulated progress bar for an order.
pub fn track(order_id: &str, out: &mut impl Write) -> Result<(), CliError> {
    let snapshot = demo::track_order(order_id)?;
    write!(out, "{}", text::render_tracking(&snapshot)?)?;
    Ok(())
}
