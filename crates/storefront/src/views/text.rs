//! Plain-text renderings for terminal front ends.

use askama::Template;

use super::CartView;
use crate::catalog::MenuItem;
use crate::demo::{StepState, TrackingSnapshot};
use crate::order::PlacedOrder;

#[derive(Template)]
#[template(path = "text/cart.txt")]
struct CartText<'a> {
    cart: &'a CartView,
}

/// One menu line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub tags: String,
}

impl From<&MenuItem> for MenuRow {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            category: item.category.clone(),
            price: item.price.to_string(),
            tags: item.dietary.join(", "),
        }
    }
}

#[derive(Template)]
#[template(path = "text/menu.txt")]
struct MenuText<'a> {
    rows: &'a [MenuRow],
}

#[derive(Template)]
#[template(path = "text/confirmation.txt")]
struct ConfirmationText<'a> {
    order: &'a PlacedOrder,
}

struct TrackingRow {
    marker: &'static str,
    label: String,
}

#[derive(Template)]
#[template(path = "text/tracking.txt")]
struct TrackingText<'a> {
    snapshot: &'a TrackingSnapshot,
    rows: Vec<TrackingRow>,
}

/// Render the cart with its totals.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_cart(cart: &CartView) -> askama::Result<String> {
    CartText { cart }.render()
}

/// Render a list of dishes.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_menu<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> askama::Result<String> {
    let rows: Vec<MenuRow> = items.into_iter().map(MenuRow::from).collect();
    MenuText { rows: &rows }.render()
}

/// Render the confirmation step for a just-placed order.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_confirmation(order: &PlacedOrder) -> askama::Result<String> {
    ConfirmationText { order }.render()
}

/// Render a tracking progress bar.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_tracking(snapshot: &TrackingSnapshot) -> askama::Result<String> {
    let rows = snapshot
        .steps
        .iter()
        .map(|(status, state)| TrackingRow {
            marker: match state {
                StepState::Completed => "[x]",
                StepState::Active => "[>]",
                StepState::Pending => "[ ]",
            },
            label: status.to_string(),
        })
        .collect();
    TrackingText { snapshot, rows }.render()
}
