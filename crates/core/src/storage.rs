//! Key-value storage port.
//!
//! The cart lives in a single named slot of a string key-value store. The
//! trait mirrors the browser `Storage` API shape: methods take `&self`, and
//! backends that need mutation use interior mutability.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;

/// A string key-value store holding serialized carts.
pub trait CartStorage {
    /// Read the value stored under `key`, or `None` if the slot is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the slot under `key`. Removing an absent slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<S: CartStorage + ?Sized> CartStorage for Rc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory storage.
///
/// Clones share the same slots, so a test can keep a handle to inspect or
/// seed raw content while a [`CartStore`](crate::CartStore) owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw content of a slot.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    /// Set raw content of a slot, bypassing the cart codec.
    pub fn set(&self, key: &str, value: impl Into<String>) {
        self.slots.borrow_mut().insert(key.to_owned(), value.into());
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Whether no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_slot_reads_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("cart").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let storage = MemoryStorage::new();
        storage.write("cart", "[]").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_clones_share_slots() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.write("cart", "[1]").unwrap();
        assert_eq!(handle.get("cart").as_deref(), Some("[1]"));
    }

    #[test]
    fn test_remove_absent_succeeds() {
        let storage = MemoryStorage::new();
        storage.remove("cart").unwrap();
        storage.set("cart", "[]");
        storage.remove("cart").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn test_slots_are_independent() {
        let storage = MemoryStorage::new();
        storage.set("cart", "[]");
        storage.set("wishlist", "[{}]");
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get("cart").as_deref(), Some("[]"));
    }
}
