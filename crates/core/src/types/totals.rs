//! Order totals derived from cart lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price::{Price, round_whole};

/// Flat tax rate applied to every order, in percent.
pub const TAX_RATE_PERCENT: u32 = 10;

/// Subtotal, tax, and grand total of a set of lines.
///
/// Totals are never stored on their own: they are recomputed from the lines
/// every time they are needed, so they can never drift from the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Sum of unit price times quantity over all lines.
    pub subtotal: Price,
    /// `round(subtotal * 10%)`, in whole rupees.
    pub tax: Price,
    /// `subtotal + tax`.
    pub total: Price,
}

impl OrderTotals {
    /// Compute totals from `(unit price, quantity)` pairs.
    ///
    /// Returns `None` if any line total, the subtotal, or the grand total
    /// does not fit in a [`Decimal`].
    #[must_use]
    pub fn from_lines<I>(lines: I) -> Option<Self>
    where
        I: IntoIterator<Item = (Price, u32)>,
    {
        let subtotal = lines
            .into_iter()
            .try_fold(Price::ZERO, |acc, (unit_price, quantity)| {
                acc.checked_add(unit_price.checked_times(quantity)?)
            })?;
        Self::from_subtotal(subtotal)
    }

    /// Compute tax and total for a known subtotal, or `None` on overflow.
    #[must_use]
    pub fn from_subtotal(subtotal: Price) -> Option<Self> {
        let rate = Decimal::new(i64::from(TAX_RATE_PERCENT), 2);
        let tax = Price::new(round_whole(subtotal.amount().checked_mul(rate)?)).ok()?;
        Some(Self {
            subtotal,
            tax,
            total: subtotal.checked_add(tax)?,
        })
    }

    /// Totals of an empty order.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            subtotal: Price::ZERO,
            tax: Price::ZERO,
            total: Price::ZERO,
        }
    }
}
