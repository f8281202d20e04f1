//! View models and renderers.
//!
//! Rendering is split in two pure steps:
//!
//! 1. Projection: `(cart lines, totals) -> CartView`, a plain view model with
//!    every amount already formatted.
//! 2. Templating: askama templates turn a view model into markup.
//!
//! A render pass always regenerates each visible view from scratch. Views
//! that are not on the current page are skipped, not treated as errors.

mod html;
pub mod text;

pub use html::{CartPopupTemplate, OrderCartTemplate, PaymentSummaryTemplate};

use std::collections::BTreeSet;

use askama::Template;
use resto_core::OrderTotals;

use crate::cart::LineItem;
use crate::wizard::OrderWizard;

/// Message shown by every cart view when the cart has no lines.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// A cart-dependent view that may be present on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewKind {
    /// Cart modal reachable from the navigation bar.
    CartPopup,
    /// Cart table on the first step of the order page.
    OrderCart,
    /// Totals panel on the payment step of the order page.
    PaymentSummary,
}

/// One cart line, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            unit_price: item.unit_price.to_string(),
            quantity: item.quantity,
            line_total: item.line_total().unwrap_or_default().to_string(),
        }
    }
}

/// The cart and its totals, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
    pub is_empty: bool,
    /// Whether the wizard's "continue" control is enabled.
    pub can_proceed: bool,
    pub empty_message: &'static str,
}

impl CartView {
    /// Project cart lines and their totals into a view model.
    #[must_use]
    pub fn project(items: &[LineItem], totals: &OrderTotals) -> Self {
        let is_empty = items.is_empty();
        // An empty cart always shows zero totals.
        let totals = if is_empty { OrderTotals::zero() } else { *totals };
        Self {
            items: items.iter().map(CartItemView::from).collect(),
            item_count: items
                .iter()
                .fold(0, |count: u32, item| count.saturating_add(item.quantity)),
            subtotal: totals.subtotal.to_string(),
            tax: totals.tax.to_string(),
            total: totals.total.to_string(),
            is_empty,
            can_proceed: OrderWizard::can_proceed_from_cart(is_empty),
            empty_message: EMPTY_CART_MESSAGE,
        }
    }
}

/// Output of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedViews {
    /// Cart badge count; the badge is part of the page chrome and always present.
    pub badge: u32,
    pub cart_popup: Option<String>,
    pub order_cart: Option<String>,
    pub payment_summary: Option<String>,
}

/// Renders the cart into whichever views the current page has.
#[derive(Debug, Clone, Default)]
pub struct ViewRenderer {
    visible: BTreeSet<ViewKind>,
}

impl ViewRenderer {
    /// A renderer for a page showing the given views.
    #[must_use]
    pub fn new(visible: impl IntoIterator<Item = ViewKind>) -> Self {
        Self {
            visible: visible.into_iter().collect(),
        }
    }

    /// Whether `kind` is present on the page.
    #[must_use]
    pub fn is_visible(&self, kind: ViewKind) -> bool {
        self.visible.contains(&kind)
    }

    /// Regenerate every visible view from the given cart view.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn render(&self, cart: &CartView) -> askama::Result<RenderedViews> {
        let mut out = RenderedViews {
            badge: cart.item_count,
            ..RenderedViews::default()
        };
        if self.is_visible(ViewKind::CartPopup) {
            out.cart_popup = Some(CartPopupTemplate { cart }.render()?);
        }
        if self.is_visible(ViewKind::OrderCart) {
            out.order_cart = Some(OrderCartTemplate { cart }.render()?);
        }
        if self.is_visible(ViewKind::PaymentSummary) {
            out.payment_summary = Some(PaymentSummaryTemplate { cart }.render()?);
        }
        Ok(out)
    }
}
