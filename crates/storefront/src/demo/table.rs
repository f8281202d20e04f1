//! Simulated QR table scanning.

use rand::Rng;
use resto_core::TableId;
use serde::{Deserialize, Serialize};

use crate::storage::{Storage, StorageError, StorageExt, keys};

/// Table numbers the scanner can produce.
pub const TABLE_NUMBERS: std::ops::RangeInclusive<u32> = 1..=20;

/// A restaurant table as encoded in its QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    pub number: u32,
    pub section: String,
    pub capacity: u32,
}

impl TableInfo {
    /// Opaque identifier handed to the order flow.
    #[must_use]
    pub fn id(&self) -> TableId {
        TableId::new(self.number.to_string())
    }

    /// Menu link that starts ordering for this table.
    #[must_use]
    pub fn menu_link(&self) -> String {
        format!("/menu?table={}", self.number)
    }

    /// Load the last scanned table, if any.
    #[must_use]
    pub fn current<S: Storage + ?Sized>(storage: &S) -> Option<Self> {
        storage
            .load_json::<Self>(keys::CURRENT_TABLE)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring unreadable table selection");
                None
            })
    }
}

/// "Scan" a table code: fabricate a table and remember it for ordering.
///
/// # Errors
///
/// Returns an error if the table cannot be stored.
pub fn scan_table<S: Storage + ?Sized>(storage: &S) -> Result<TableInfo, StorageError> {
    let table = TableInfo {
        number: rand::rng().random_range(TABLE_NUMBERS),
        section: "Main Hall".to_string(),
        capacity: 4,
    };
    storage.save_json(keys::CURRENT_TABLE, &table)?;
    tracing::info!(table = table.number, "Table scanned");
    Ok(table)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_scan_stores_table() {
        let storage = MemoryStorage::new();
        assert!(TableInfo::current(&storage).is_none());

        let table = scan_table(&storage).unwrap();
        assert!(TABLE_NUMBERS.contains(&table.number));
        assert_eq!(table.section, "Main Hall");
        assert_eq!(table.capacity, 4);
        assert_eq!(TableInfo::current(&storage), Some(table.clone()));
        assert_eq!(table.menu_link(), format!("/menu?table={}", table.number));
        assert_eq!(table.id().as_str(), table.number.to_string());
    }
}
