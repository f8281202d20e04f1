//! HTML templates for the cart views.

use askama::Template;

use super::CartView;

/// Cart modal body: lines with quantity controls, and the running total.
#[derive(Template)]
#[template(path = "cart/popup.html")]
pub struct CartPopupTemplate<'a> {
    pub cart: &'a CartView,
}

/// Cart step of the order page: lines, totals, and the continue button.
#[derive(Template)]
#[template(path = "order/cart.html")]
pub struct OrderCartTemplate<'a> {
    pub cart: &'a CartView,
}

/// Totals panel on the payment step.
#[derive(Template)]
#[template(path = "order/payment_summary.html")]
pub struct PaymentSummaryTemplate<'a> {
    pub cart: &'a CartView,
}
