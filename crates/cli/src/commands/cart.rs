//! Cart commands.

use std::io::Write;

use resto_core::ProductId;
use resto_storefront::views::text;

use super::{App, CliError};

/// Print the cart with its totals.
pub fn show(app: &App, out: &mut impl Write) -> Result<(), CliError> {
    let session = app.session();
    write!(out, "{}", text::render_cart(&session.cart_view())?)?;
    Ok(())
}

/// Add one unit of a menu dish.
pub fn add(app: &App, id: &ProductId, out: &mut impl Write) -> Result<(), CliError> {
    let item = app
        .menu
        .find(id)
        .ok_or_else(|| CliError::UnknownDish(id.to_string()))?;
    let mut session = app.session();
    let views = session.add_menu_item(item)?;
    writeln!(out, "Added {} to cart ({} items)", item.name, views.badge)?;
    Ok(())
}

/// Add one unit to an existing line.
pub fn increment(app: &App, id: &ProductId, out: &mut impl Write) -> Result<(), CliError> {
    let mut session = app.session();
    session.increment(id)?;
    write!(out, "{}", text::render_cart(&session.cart_view())?)?;
    Ok(())
}

/// Remove one unit from a line.
pub fn decrement(app: &App, id: &ProductId, out: &mut impl Write) -> Result<(), CliError> {
    let mut session = app.session();
    session.decrement(id)?;
    write!(out, "{}", text::render_cart(&session.cart_view())?)?;
    Ok(())
}

/// Remove a line.
pub fn remove(app: &App, id: &ProductId, out: &mut impl Write) -> Result<(), CliError> {
    let mut session = app.session();
    session.remove(id)?;
    write!(out, "{}", text::render_cart(&session.cart_view())?)?;
    Ok(())
}

/// Empty the cart.
pub fn clear(app: &App, out: &mut impl Write) -> Result<(), CliError> {
    app.session().clear()?;
    writeln!(out, "Cart cleared")?;
    Ok(())
}
