//! In-memory storage backend.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{Storage, StorageError};

/// In-process storage.
///
/// Cloning yields another handle onto the same entries, the way two scripts
/// on one page see the same browser storage. Not `Send`: the session is
/// single-threaded.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let first = MemoryStorage::new();
        let second = first.clone();
        first.set("cart", "[]").unwrap();
        assert_eq!(second.get("cart").unwrap().as_deref(), Some("[]"));
        second.remove("cart").unwrap();
        assert!(first.get("cart").unwrap().is_none());
    }

    #[test]
    fn test_remove_absent_is_ok() {
        let storage = MemoryStorage::new();
        assert!(storage.remove("nothing").is_ok());
        assert!(storage.get("nothing").unwrap().is_none());
    }
}
