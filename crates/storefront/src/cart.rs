//! Cart store.
//!
//! The cart is an ordered list of [`LineItem`]s owned by one session. Every
//! mutation writes the full list back to storage under
//! [`keys::CART`](crate::storage::keys::CART), replacing the previous
//! snapshot. On start the cart is rebuilt from that snapshot; an absent or
//! corrupt snapshot yields an empty cart.
//!
//! The cart's totals always fit in a [`Decimal`](rust_decimal::Decimal):
//! lines that would overflow them are dropped on load and refused on add.

use resto_core::{OrderTotals, Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::storage::{Storage, StorageError, StorageExt, keys};

/// One product entry in the cart.
///
/// Unique by `id` within a cart. `quantity` is always at least 1: a line
/// whose quantity would drop to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product this line refers to.
    pub id: ProductId,
    /// Display name captured when the product was added.
    pub name: String,
    /// Price of a single unit.
    #[serde(rename = "price")]
    pub unit_price: Price,
    /// Number of units, at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// `unit_price * quantity`, or `None` if it overflows.
    #[must_use]
    pub fn line_total(&self) -> Option<Price> {
        self.unit_price.checked_times(self.quantity)
    }
}

/// The session's cart, mirrored into durable storage.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    items: Vec<LineItem>,
}

impl<S: Storage> CartStore<S> {
    /// Rebuild the cart from the persisted snapshot.
    ///
    /// Never fails: an unreadable or corrupt snapshot is logged and replaced
    /// by an empty cart.
    pub fn load(storage: S) -> Self {
        let items = match storage.load_json::<Vec<LineItem>>(keys::CART) {
            Ok(Some(items)) => normalize(items),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable cart snapshot");
                Vec::new()
            }
        };
        tracing::debug!(lines = items.len(), "Cart loaded");
        Self { storage, items }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines (the cart badge), saturating
    /// at `u32::MAX`.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    /// Subtotal, tax, and total of the current lines.
    #[must_use]
    pub fn totals(&self) -> OrderTotals {
        totals_of(&self.items).unwrap_or_default()
    }

    /// The storage handle backing this cart.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for `id`, or appends a new line with
    /// quantity 1. The name and price of an existing line are left as they
    /// were when it was first added.
    ///
    /// # Errors
    ///
    /// A unit whose cost would overflow the cart totals is refused: the cart
    /// and its snapshot are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted. The in-memory
    /// cart is updated regardless.
    pub fn add(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        unit_price: Price,
    ) -> Result<(), StorageError> {
        if self.get(&id).is_some() {
            self.increment(&id)?;
            return Ok(());
        }
        let line = LineItem {
            id,
            name: name.into(),
            unit_price,
            quantity: 1,
        };
        self.items.push(line);
        if totals_of(&self.items).is_none() {
            if let Some(line) = self.items.pop() {
                tracing::warn!(product_id = %line.id, "Refusing cart line that overflows the totals");
            }
            return Ok(());
        }
        if let Some(line) = self.items.last() {
            tracing::debug!(product_id = %line.id, "Cart line added");
        }
        self.persist()
    }

    /// Add one unit to an existing line.
    ///
    /// Returns `false` without touching storage if `id` is not in the cart or
    /// one more unit would overflow the cart totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub fn increment(&mut self, id: &ProductId) -> Result<bool, StorageError> {
        let Some(index) = self.items.iter().position(|item| &item.id == id) else {
            return Ok(false);
        };
        let Some(item) = self.items.get_mut(index) else {
            return Ok(false);
        };
        let Some(quantity) = item.quantity.checked_add(1) else {
            tracing::warn!(product_id = %id, "Cart line quantity is at its maximum");
            return Ok(false);
        };
        item.quantity = quantity;
        if totals_of(&self.items).is_none() {
            if let Some(item) = self.items.get_mut(index) {
                item.quantity -= 1;
            }
            tracing::warn!(product_id = %id, "Refusing increment that overflows the totals");
            return Ok(false);
        }
        tracing::debug!(product_id = %id, quantity, "Cart line incremented");
        self.persist()?;
        Ok(true)
    }

    /// Remove one unit from a line, dropping the line when it reaches zero.
    ///
    /// Returns `false` without touching storage if `id` is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub fn decrement(&mut self, id: &ProductId) -> Result<bool, StorageError> {
        let Some(index) = self.items.iter().position(|item| &item.id == id) else {
            return Ok(false);
        };
        let drop_line = self.items.get(index).is_some_and(|item| item.quantity <= 1);
        if drop_line {
            self.items.remove(index);
            tracing::debug!(product_id = %id, "Cart line removed by decrement");
        } else if let Some(item) = self.items.get_mut(index) {
            item.quantity -= 1;
        }
        self.persist()?;
        Ok(true)
    }

    /// Delete a line entirely.
    ///
    /// Returns `false` without touching storage if `id` is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    pub fn remove(&mut self, id: &ProductId) -> Result<bool, StorageError> {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        tracing::debug!(product_id = %id, "Cart line removed");
        self.persist()?;
        Ok(true)
    }

    /// Empty the cart and erase the persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be erased.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.items.clear();
        tracing::debug!("Cart cleared");
        self.storage.remove(keys::CART)
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.storage.save_json(keys::CART, &self.items)
    }
}

fn totals_of(items: &[LineItem]) -> Option<OrderTotals> {
    OrderTotals::from_lines(items.iter().map(|item| (item.unit_price, item.quantity)))
}

/// Restore the cart invariants on a snapshot read from storage: no zero
/// quantities, one line per product, totals that fit.
fn normalize(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut lines: Vec<LineItem> = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity == 0 {
            tracing::warn!(product_id = %item.id, "Dropping zero-quantity cart line");
            continue;
        }
        if let Some(index) = lines.iter().position(|line| line.id == item.id) {
            let Some(existing) = lines.get_mut(index) else {
                continue;
            };
            let before = existing.quantity;
            existing.quantity = before.saturating_add(item.quantity);
            if totals_of(&lines).is_none() {
                if let Some(existing) = lines.get_mut(index) {
                    existing.quantity = before;
                }
                tracing::warn!(product_id = %item.id, "Dropping duplicate cart line that overflows the totals");
            }
        } else {
            let id = item.id.clone();
            lines.push(item);
            if totals_of(&lines).is_none() {
                lines.pop();
                tracing::warn!(product_id = %id, "Dropping cart line that overflows the totals");
            }
        }
    }
    lines
}
