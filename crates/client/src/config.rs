//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ARCANA_CART_DATA_DIR` - Directory holding file-backed slots (default: `.arcana-cart`)
//! - `ARCANA_CART_STORAGE_KEY` - Name of the cart slot (default: `cart`)
//! - `ARCANA_CART_BADGE_SELECTOR` - CSS selector of the badge element (default: `#cart-count`)
//! - `ARCANA_CART_LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `RUST_LOG` - Tracing filter, read by [`crate::telemetry`]

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".arcana-cart";
const DEFAULT_STORAGE_KEY: &str = "cart";
const DEFAULT_BADGE_SELECTOR: &str = "#cart-count";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `text` or `json`, got `{other}`")),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory for file-backed storage slots
    pub data_dir: PathBuf,
    /// Storage slot holding the cart
    pub storage_key: String,
    /// CSS selector locating the badge element
    pub badge_selector: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            badge_selector: DEFAULT_BADGE_SELECTOR.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let data_dir = PathBuf::from(get_or_default("ARCANA_CART_DATA_DIR", DEFAULT_DATA_DIR));

        let storage_key = get_or_default("ARCANA_CART_STORAGE_KEY", DEFAULT_STORAGE_KEY);
        validate_storage_key(&storage_key).map_err(|reason| {
            ConfigError::InvalidEnvVar("ARCANA_CART_STORAGE_KEY".to_string(), reason)
        })?;

        let badge_selector = get_or_default("ARCANA_CART_BADGE_SELECTOR", DEFAULT_BADGE_SELECTOR);

        let log_format = get_or_default("ARCANA_CART_LOG_FORMAT", "text")
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::InvalidEnvVar("ARCANA_CART_LOG_FORMAT".to_string(), e))?;

        Ok(Self {
            data_dir,
            storage_key,
            badge_selector,
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Check that a slot name is usable as a storage key and a file stem.
///
/// # Errors
///
/// Returns a description of the problem if the key is empty, a dot path,
/// or contains characters outside `[A-Za-z0-9_.-]`.
pub fn validate_storage_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("storage key cannot be empty".to_string());
    }

    if key == "." || key == ".." {
        return Err(format!("storage key `{key}` is reserved"));
    }

    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
    {
        return Err(format!("storage key contains invalid character `{bad}`"));
    }

    Ok(())
}
