//! Resto Core - Shared types library.
//!
//! This crate provides the domain types used across the Resto components:
//! - `storefront` - Cart & order session manager, views, bill rendering
//! - `cli` - Terminal front end over file-backed storage
//!
//! # Architecture
//!
//! The core crate contains only types and pure arithmetic - no I/O, no
//! storage access, no rendering. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, table IDs, order numbers,
//!   prices, order totals, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
