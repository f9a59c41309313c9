//! Integration tests for Arcana Cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p arcana-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - end-to-end cart sequences over memory and file slots
//! - `badge_sync` - badge state across store operations
//! - `storage_fallback` - malformed and legacy slot contents
//!
//! This module holds the shared fixtures.

use arcana_cart_client::FileStorage;
use arcana_cart_core::{BadgeRefresher, CartStorage, CartStore, LineItem, MemoryBadge};

/// Slot name used by every fixture.
pub const KEY: &str = "cart";

/// A card line item with placeholder display data.
#[must_use]
pub fn card(id: &str, qty: i64) -> LineItem {
    LineItem::new(
        id,
        format!("Card {id}"),
        1.5,
        format!("assets/cards/{id}.png"),
        qty,
    )
}

/// Store over `storage` with a memory badge subscribed.
pub fn store_with_badge<S: CartStorage>(storage: S) -> (CartStore<S>, MemoryBadge) {
    let badge = MemoryBadge::new();
    let store = CartStore::new(storage, KEY).with_observer(BadgeRefresher::new(badge.clone()));
    (store, badge)
}

/// A file-backed store rooted in a fresh temporary directory.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
#[must_use]
#[allow(clippy::expect_used)]
pub fn file_store() -> (tempfile::TempDir, CartStore<FileStorage>, MemoryBadge) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let (store, badge) = store_with_badge(FileStorage::new(dir.path()));
    (dir, store, badge)
}

/// `(id, qty)` pairs of a store's cart in order.
pub fn quantities<S: CartStorage>(store: &CartStore<S>) -> Vec<(String, i64)> {
    store
        .load()
        .into_iter()
        .map(|item| (item.id.into_inner(), item.qty))
        .collect()
}
