//! Storage backends for the cart slot.
//!
//! - [`FileStorage`] - one JSON file per slot in a data directory
//! - `LocalStorage` - the browser's `window.localStorage` (`web` feature)
//!
//! The in-memory backend lives in `arcana-cart-core` as
//! [`MemoryStorage`](arcana_cart_core::MemoryStorage).

pub mod file;
#[cfg(feature = "web")]
pub mod web;

pub use file::FileStorage;
#[cfg(feature = "web")]
pub use web::LocalStorage;
