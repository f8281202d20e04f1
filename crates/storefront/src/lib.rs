//! Resto 2.0 cart & order session manager.
//!
//! The storefront keeps a visitor's cart in durable storage, renders it into
//! whichever cart views are on the page, and walks the order wizard from the
//! cart to a placed order and its printable bill. The [`demo`] module
//! simulates the table scanner, loyalty points, and order tracker.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bill;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod demo;
pub mod error;
pub mod order;
pub mod preferences;
pub mod print;
pub mod session;
pub mod storage;
pub mod telemetry;
pub mod views;
pub mod wizard;

pub use error::{Result, StorefrontError};
pub use session::Session;
