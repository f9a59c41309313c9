//! Arcana Cart Client - host adapters for the cart store.
//!
//! `arcana-cart-core` defines the cart and its ports. This crate plugs them
//! into a real host:
//!
//! - [`storage`] - file-backed slots, and `localStorage` with the `web` feature
//! - [`badge`] - terminal badge, and the DOM badge with the `web` feature
//! - [`config`] - configuration from environment variables
//! - [`telemetry`] - tracing subscriber setup
//! - `browser` - page-ready wiring for the browser (`web` feature)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod badge;
#[cfg(feature = "web")]
pub mod browser;
pub mod config;
pub mod storage;
pub mod telemetry;

pub use badge::TerminalBadge;
pub use config::{ClientConfig, ConfigError, LogFormat};
pub use storage::FileStorage;
