//! Durable, string-keyed storage for the session.
//!
//! The storage seam mirrors the browser's local storage: string keys, JSON
//! string values, full-replace writes, last writer wins. Two backends are
//! provided:
//!
//! - [`MemoryStorage`] - in-process map, used by tests and embedders
//! - [`FileStorage`] - one JSON file per key inside a data directory
//!
//! Typed access goes through [`StorageExt`], which adds JSON encoding on top
//! of the raw string contract.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage keys owned by the session.
pub mod keys {
    /// Ordered sequence of cart line items.
    pub const CART: &str = "cart";

    /// Snapshot of the most recently placed order.
    pub const LAST_ORDER: &str = "lastOrder";

    /// Colour theme preference (`"dark"` or `"light"`).
    pub const THEME: &str = "theme";

    /// Table picked up by the table scanner.
    pub const CURRENT_TABLE: &str = "currentTable";

    /// Loyalty point balance.
    pub const USER_POINTS: &str = "userPoints";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key contains characters the backend cannot represent.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// A value could not be encoded as JSON.
    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A stored value is not valid JSON for the expected type.
    #[error("corrupt value under {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string-keyed, string-valued durable store.
///
/// Methods take `&self`: a storage handle behaves like a reference to one
/// shared store, so several components can hold handles to the same data.
pub trait Storage {
    /// Read the raw value under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// JSON helpers available on every [`Storage`].
pub trait StorageExt: Storage {
    /// Load and decode the JSON value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] if the value does not decode as `T`,
    /// or any backend read error.
    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    /// Encode `value` as JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] if serialization fails, or any
    /// backend write error.
    fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &raw)
    }
}

impl<S: Storage + ?Sized> StorageExt for S {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_absent_is_none() {
        let storage = MemoryStorage::new();
        let loaded: Option<Vec<u32>> = storage.load_json("missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_json_corrupt_value() {
        let storage = MemoryStorage::new();
        storage.set(keys::CART, "{not json").unwrap();
        let result: Result<Option<Vec<u32>>, _> = storage.load_json(keys::CART);
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        storage.save_json("numbers", &[1, 2, 3]).unwrap();
        assert_eq!(storage.get("numbers").unwrap().as_deref(), Some("[1,2,3]"));
        let loaded: Option<Vec<u32>> = storage.load_json("numbers").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_borrowed_handle_is_storage() {
        let storage = MemoryStorage::new();
        let handle = &storage;
        handle.set(keys::THEME, "\"dark\"").unwrap();
        assert!(storage.get(keys::THEME).unwrap().is_some());
    }
}
