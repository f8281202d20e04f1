//! Core types for Resto.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod status;
pub mod totals;

pub use id::*;
pub use price::{Price, PriceError};
pub use status::*;
pub use totals::{OrderTotals, TAX_RATE_PERCENT};
