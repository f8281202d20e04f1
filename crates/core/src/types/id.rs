//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use core::fmt;
use core::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Macro to define a type-safe, string-backed ID wrapper.
///
/// Identifiers in this system are opaque strings handed over by the menu
/// markup or the table scanner, so the wrapper never interprets them.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>`, `AsRef<str>` and `Display`
///
/// # Example
///
/// ```rust
/// # use resto_core::define_id;
/// define_id!(DishId);
/// define_id!(SeatId);
///
/// let dish = DishId::new("7");
/// let seat = SeatId::new("7");
///
/// // These are different types, so this won't compile:
/// // let _: DishId = seat;
/// assert_eq!(dish.as_str(), seat.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Purchasable menu entry; identifies a product, not a cart slot.
define_id!(ProductId);
// Table identifier produced by the scanner; opaque to the order core.
define_id!(TableId);

/// A six-digit order number shown on the confirmation page and the bill.
///
/// Numbers are drawn at random from [`OrderNumber::RANGE`]. There is no
/// collision check against previously placed orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(u32);

impl OrderNumber {
    /// The inclusive range order numbers are drawn from.
    pub const RANGE: RangeInclusive<u32> = 100_000..=999_999;

    /// Wrap an existing order number.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Draw a fresh pseudo-random order number.
    #[must_use]
    pub fn generate() -> Self {
        Self(rand::rng().random_range(Self::RANGE))
    }

    /// Get the underlying number.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for OrderNumber {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_is_transparent_string() {
        let id = ProductId::new("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
        let parsed: ProductId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_generated_order_numbers_stay_in_range() {
        for _ in 0..1_000 {
            let number = OrderNumber::generate();
            assert!(OrderNumber::RANGE.contains(&number.as_u32()));
        }
    }

    #[test]
    fn test_order_number_display() {
        assert_eq!(OrderNumber::new(123_456).to_string(), "123456");
    }
}
