//! Core types for Arcana Cart.
//!
//! This module provides the cart data model and its pure operations.

pub mod cart;
pub mod id;
pub mod line_item;
pub mod quantity;

pub use cart::Cart;
pub use id::{ItemId, ItemIdError};
pub use line_item::LineItem;
pub use quantity::clamp_quantity;
