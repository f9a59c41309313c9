//! The cart store.
//!
//! Every operation is a full read-modify-write against the storage slot.
//! Nothing is cached between calls, so the slot is the only source of truth.
//!
//! Reads never fail: an absent, unreadable, or malformed slot is an empty
//! cart. Writes can fail (a full disk, an exceeded browser quota) and those
//! errors are returned. Observers get one `on_change` after each successful
//! write or clear and none after a failed one. `refresh_badge` and
//! `initialize` write nothing and reach observers through `on_refresh`.

use std::fmt;

use tracing::instrument;

use crate::codec::{serialize, try_deserialize};
use crate::error::StorageError;
use crate::observer::CartObserver;
use crate::storage::CartStorage;
use crate::types::{Cart, LineItem};

/// Default storage slot name.
pub const DEFAULT_KEY: &str = "cart";

/// Cart persisted in a single named storage slot.
pub struct CartStore<S> {
    storage: S,
    key: String,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: CartStorage> CartStore<S> {
    /// Create a store over the slot `key` in `storage`.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            observers: Vec::new(),
        }
    }

    /// Register an observer, builder style.
    #[must_use]
    pub fn with_observer(mut self, observer: impl CartObserver + 'static) -> Self {
        self.subscribe(observer);
        self
    }

    /// Register an observer to be notified after every save or clear and
    /// on every resync.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The storage slot name.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the cart from storage, or an empty cart if the slot is absent,
    /// unreadable, or malformed.
    #[must_use]
    pub fn load(&self) -> Cart {
        match self.storage.read(&self.key) {
            Ok(raw) => try_deserialize(raw.as_deref()),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read cart, treating as empty");
                Cart::default()
            }
        }
    }

    /// Overwrite the slot with `cart`, then notify observers.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be encoded or the write fails.
    /// Observers are not notified in that case.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serialize(cart)?;
        self.storage.write(&self.key, &raw)?;
        tracing::debug!(key = %self.key, items = cart.len(), "Cart saved");
        self.notify(cart);
        Ok(())
    }

    /// Total quantity across all items. Zero for an empty or unreadable cart.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.load().total_quantity()
    }

    /// Look up a single item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<LineItem> {
        self.load().get(id).cloned()
    }

    /// Add an item, accumulating quantity onto an existing entry with the
    /// same id. The existing entry keeps its name, price and image.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be saved.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn add_item(&self, item: LineItem) -> Result<(), StorageError> {
        let mut cart = self.load();
        cart.add(item);
        self.save(&cart)
    }

    /// Set an item's quantity to `max(1, floor(qty))`.
    ///
    /// Returns `Ok(false)` without writing when no item has `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be saved.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn set_quantity(&self, id: &str, qty: f64) -> Result<bool, StorageError> {
        let mut cart = self.load();
        if !cart.set_quantity(id, qty) {
            tracing::debug!("No such item, nothing to update");
            return Ok(false);
        }
        self.save(&cart)?;
        Ok(true)
    }

    /// Remove the item with `id`. The cart is saved even when nothing
    /// matched. Returns whether an item was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be saved.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn remove_item(&self, id: &str) -> Result<bool, StorageError> {
        let mut cart = self.load();
        let removed = cart.remove(id);
        self.save(&cart)?;
        Ok(removed)
    }

    /// Delete the storage slot, then notify observers with an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be removed.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)?;
        tracing::debug!("Cart slot removed");
        self.notify(&Cart::default());
        Ok(())
    }

    /// Resync observers with the stored cart so the badge reflects it.
    /// Nothing is written.
    pub fn refresh_badge(&self) {
        let cart = self.load();
        tracing::trace!(observers = self.observers.len(), "Refreshing cart observers");
        for observer in &self.observers {
            observer.on_refresh(&cart);
        }
    }

    /// Page-ready hook. Syncs observers with the stored cart once.
    pub fn initialize(&self) {
        tracing::debug!(key = %self.key, "Cart store initialized");
        self.refresh_badge();
    }

    fn notify(&self, cart: &Cart) {
        tracing::trace!(observers = self.observers.len(), "Notifying cart observers");
        for observer in &self.observers {
            observer.on_change(cart);
        }
    }
}

impl<S> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
