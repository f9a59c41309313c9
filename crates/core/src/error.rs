//! Storage error type.

use thiserror::Error;

/// Errors raised by a [`CartStorage`](crate::CartStorage) backend.
///
/// Only writes surface these to callers. A failed read is logged and the
/// cart is treated as empty.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing store is missing or rejected the operation
    /// (no `localStorage`, quota exceeded, ...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The cart could not be encoded.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
