//! Integration tests for Resto 2.0.
//!
//! These tests drive the storefront through [`FileStorage`], the same
//! backend the CLI uses, so every scenario exercises real persistence across
//! separately opened sessions.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p resto-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `order_flow` - Cart to confirmation, with persistence between sessions
//! - `bill_rendering` - Bills read back from stored orders
//! - `totals` - Arithmetic properties of order totals

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use resto_core::{Price, ProductId};
use resto_storefront::cart::LineItem;
use resto_storefront::order::CustomerDetails;
use resto_storefront::session::Session;
use resto_storefront::storage::{FileStorage, StorageError};
use resto_storefront::views::{ViewKind, ViewRenderer};

/// A throwaway data directory, removed on drop.
#[derive(Debug)]
pub struct TestContext {
    dir: PathBuf,
    pub storage: FileStorage,
}

impl TestContext {
    /// Create a fresh data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new() -> Result<Self, StorageError> {
        let dir = std::env::temp_dir().join(format!("resto-it-{}", uuid::Uuid::new_v4()));
        let storage = FileStorage::open(&dir)?;
        Ok(Self { dir, storage })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// A session as the order page would open it: every cart view present.
    #[must_use]
    pub fn order_page(&self) -> Session<&FileStorage> {
        Session::open(
            &self.storage,
            ViewRenderer::new([
                ViewKind::CartPopup,
                ViewKind::OrderCart,
                ViewKind::PaymentSummary,
            ]),
        )
    }

    /// A session as a menu page would open it: only the cart popup.
    #[must_use]
    pub fn menu_page(&self) -> Session<&FileStorage> {
        Session::open(&self.storage, ViewRenderer::new([ViewKind::CartPopup]))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

/// Details that pass validation.
#[must_use]
pub fn customer() -> CustomerDetails {
    CustomerDetails::new("Asha Rao", "asha@example.com", "555-0100")
}

/// A fixed order date.
#[must_use]
pub fn order_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap_or_default()
}

/// Shorthand for a line item.
#[must_use]
pub fn line(id: &str, name: &str, price: u32, quantity: u32) -> LineItem {
    LineItem {
        id: ProductId::new(id),
        name: name.to_string(),
        unit_price: Price::whole(price),
        quantity,
    }
}
