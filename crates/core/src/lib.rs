//! Arcana Cart Core - client-side shopping cart state.
//!
//! This crate provides the cart model and the store that persists it:
//! - [`types`] - `ItemId`, `LineItem`, `Cart`, and the quantity rules
//! - [`codec`] - JSON encoding of a cart, with the lenient decoder
//! - [`storage`] - the `CartStorage` port and an in-memory slot
//! - [`observer`] - the `CartObserver` change-notification port
//! - [`badge`] - badge rendering as a cart observer
//! - [`store`] - `CartStore`, the read-modify-write operations
//!
//! # Architecture
//!
//! The core crate contains only types, traits, and pure logic - no
//! filesystem access, no browser bindings. Host adapters (file slots,
//! `localStorage`, the DOM badge) live in `arcana-cart-client`.
//!
//! # Example
//!
//! ```
//! use arcana_cart_core::{CartStore, LineItem, MemoryStorage};
//!
//! let store = CartStore::new(MemoryStorage::new(), "cart");
//! store.add_item(LineItem::new("a", "Ember Drake", 2.5, "drake.png", 2)).unwrap();
//! store.add_item(LineItem::new("a", "Ember Drake", 2.5, "drake.png", 3)).unwrap();
//! assert_eq!(store.count(), 5);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod badge;
pub mod codec;
pub mod error;
pub mod observer;
pub mod storage;
pub mod store;
pub mod types;

pub use badge::{BadgeHost, BadgeRefresher, BadgeSlot, BadgeState, MemoryBadge};
pub use codec::{serialize, try_deserialize};
pub use error::StorageError;
pub use observer::CartObserver;
pub use storage::{CartStorage, MemoryStorage};
pub use store::{CartStore, DEFAULT_KEY};
pub use types::*;
