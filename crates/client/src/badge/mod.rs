//! Badge renderers.
//!
//! - [`TerminalBadge`] - prints the badge as a line of text
//! - `DomBadge` - the page element matched by a CSS selector (`web` feature)
//!
//! Both are [`BadgeHost`](arcana_cart_core::BadgeHost)s driven by
//! [`BadgeRefresher`](arcana_cart_core::BadgeRefresher).

pub mod terminal;
#[cfg(feature = "web")]
pub mod web;

pub use terminal::TerminalBadge;
#[cfg(feature = "web")]
pub use web::DomBadge;
