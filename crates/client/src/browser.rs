//! Browser wiring.
//!
//! Call [`mount`] once the page is ready. It opens the cart slot in
//! `localStorage`, subscribes the DOM badge, and renders the stored count.

use arcana_cart_core::{BadgeRefresher, CartStore, StorageError};

use crate::badge::DomBadge;
use crate::config::ClientConfig;
use crate::storage::LocalStorage;

/// Build the page's cart store and run its page-ready hook.
///
/// Pages without a badge element still get a working store; the badge
/// refresher simply finds nothing to update.
///
/// # Errors
///
/// Returns [`StorageError::Unavailable`] if `localStorage` cannot be opened.
pub fn mount(config: &ClientConfig) -> Result<CartStore<LocalStorage>, StorageError> {
    let storage = LocalStorage::from_window()?;
    let mut store = CartStore::new(storage, config.storage_key.as_str());

    match DomBadge::from_window(config.badge_selector.as_str()) {
        Some(badge) => store.subscribe(BadgeRefresher::new(badge)),
        None => tracing::debug!("No document, cart badge disabled"),
    }

    store.initialize();
    Ok(store)
}
