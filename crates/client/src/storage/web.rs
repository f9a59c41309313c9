//! Browser `localStorage` backend.

use arcana_cart_core::{CartStorage, StorageError};
use wasm_bindgen::JsValue;

/// Storage backed by `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Wrap an existing `Storage` object.
    #[must_use]
    pub const fn new(storage: web_sys::Storage) -> Self {
        Self { storage }
    }

    /// The current window's `localStorage`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] outside a window context or when
    /// the browser denies storage access.
    pub fn from_window() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self::new(storage))
    }
}

impl CartStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

#[allow(clippy::needless_pass_by_value)]
fn js_error(value: JsValue) -> StorageError {
    StorageError::Unavailable(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}
