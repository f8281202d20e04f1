//! Menu listing.

use std::io::Write;

use resto_storefront::catalog::{MenuFilter, PriceBand};
use resto_storefront::views::text;

use super::{App, CliError};

/// Print the dishes passing the given filters.
pub fn list(
    app: &App,
    category: Option<String>,
    search: Option<String>,
    price: PriceBand,
    dietary: Option<String>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let filter = MenuFilter {
        category,
        search,
        price,
        dietary,
    };
    let items = app.menu.filter(&filter);
    if items.is_empty() {
        writeln!(out, "No dishes match your filters.")?;
        return Ok(());
    }
    write!(out, "{}", text::render_menu(items)?)?;
    Ok(())
}
