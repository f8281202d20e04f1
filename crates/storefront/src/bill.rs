//! Bill rendering from the last placed order.
//!
//! The bill reads the persisted [`PlacedOrder`](crate::order::PlacedOrder)
//! snapshot, never the live cart. It is deliberately forgiving about what it
//! finds in storage:
//!
//! - no snapshot, or a snapshot without its header fields: logged at error
//!   level, and nothing is rendered
//! - an item entry missing its name, price, or quantity, or whose line total
//!   overflows: logged at warn level and skipped; the remaining rows still
//!   render

use askama::Template;
use resto_core::{OrderNumber, OrderTotals, OrderType, PaymentMethod, Price, TableId};
use serde::Deserialize;

use crate::order::PlacedItem;
use crate::storage::{Storage, keys};

/// Message shown in the item table when there are no rows.
pub const NO_ITEMS_MESSAGE: &str = "No items in order";

/// One itemized row of the bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillRow {
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl From<&PlacedItem> for BillRow {
    fn from(item: &PlacedItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            line_total: item
                .unit_price
                .checked_times(item.quantity)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

/// A placed order, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillView {
    pub order_number: OrderNumber,
    pub date: String,
    pub customer_name: String,
    pub rows: Vec<BillRow>,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub order_type: Option<OrderType>,
    pub payment_method: Option<PaymentMethod>,
    pub table: Option<TableId>,
    pub no_items_message: &'static str,
}

/// Printable bill markup.
#[derive(Template)]
#[template(path = "bill/bill.html")]
pub struct BillTemplate<'a> {
    pub bill: &'a BillView,
}

/// Plain-text bill for terminals.
#[derive(Template)]
#[template(path = "text/bill.txt")]
pub struct BillTextTemplate<'a> {
    pub bill: &'a BillView,
}

/// Lenient shape of a stored order: items stay raw so that one bad entry
/// cannot sink the whole bill.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredOrder {
    order_number: OrderNumber,
    date: String,
    customer_name: String,
    #[serde(default)]
    items: Vec<serde_json::Value>,
    #[serde(default)]
    subtotal: Option<Price>,
    #[serde(default)]
    tax: Option<Price>,
    #[serde(default)]
    total: Option<Price>,
    #[serde(default)]
    order_type: Option<OrderType>,
    #[serde(default)]
    payment_method: Option<PaymentMethod>,
    #[serde(default)]
    table: Option<TableId>,
}

/// Renders the most recently placed order.
#[derive(Debug, Clone)]
pub struct BillRenderer<S> {
    storage: S,
}

impl<S: Storage> BillRenderer<S> {
    /// A renderer reading from `storage`.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the last placed order as a bill view.
    ///
    /// Returns `None` (after logging) when there is no usable snapshot.
    #[must_use]
    pub fn load(&self) -> Option<BillView> {
        let raw = match self.storage.get(keys::LAST_ORDER) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::error!("No order details found");
                return None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read order details");
                return None;
            }
        };

        let stored: StoredOrder = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::error!(error = %e, "Order details are unreadable");
                return None;
            }
        };

        Some(build_view(stored))
    }

    /// Render the bill as HTML, or an empty string when there is no order.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_html(&self) -> askama::Result<String> {
        self.load()
            .map_or_else(|| Ok(String::new()), |bill| BillTemplate { bill: &bill }.render())
    }

    /// Render the bill as plain text, or an empty string when there is no order.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_text(&self) -> askama::Result<String> {
        self.load().map_or_else(
            || Ok(String::new()),
            |bill| BillTextTemplate { bill: &bill }.render(),
        )
    }
}

fn build_view(stored: StoredOrder) -> BillView {
    let items: Vec<PlacedItem> = stored
        .items
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| parse_item(index, value))
        .collect();

    let totals = match (stored.subtotal, stored.tax, stored.total) {
        (Some(subtotal), Some(tax), Some(total)) => OrderTotals {
            subtotal,
            tax,
            total,
        },
        _ => {
            tracing::warn!(
                order_number = %stored.order_number,
                "Order totals missing, recomputing from items"
            );
            OrderTotals::from_lines(items.iter().map(|item| (item.unit_price, item.quantity)))
                .unwrap_or_else(|| {
                    tracing::warn!(
                        order_number = %stored.order_number,
                        "Recomputed order totals overflow, showing zero"
                    );
                    OrderTotals::zero()
                })
        }
    };

    BillView {
        order_number: stored.order_number,
        date: stored.date,
        customer_name: stored.customer_name,
        rows: items.iter().map(BillRow::from).collect(),
        subtotal: totals.subtotal.to_string(),
        tax: totals.tax.to_string(),
        total: totals.total.to_string(),
        order_type: stored.order_type,
        payment_method: stored.payment_method,
        table: stored.table,
        no_items_message: NO_ITEMS_MESSAGE,
    }
}

fn parse_item(index: usize, value: serde_json::Value) -> Option<PlacedItem> {
    match serde_json::from_value::<PlacedItem>(value) {
        Ok(item) if item.name.trim().is_empty() || item.quantity == 0 => {
            tracing::warn!(index, "Skipping bill item with empty name or zero quantity");
            None
        }
        Ok(item) if item.unit_price.checked_times(item.quantity).is_none() => {
            tracing::warn!(index, "Skipping bill item whose line total overflows");
            None
        }
        Ok(item) => Some(item),
        Err(e) => {
            tracing::warn!(index, error = %e, "Skipping malformed bill item");
            None
        }
    }
}
