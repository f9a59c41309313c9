//! Cart count badge.
//!
//! The badge is a single page element showing the total quantity in the
//! cart. [`BadgeRefresher`] subscribes to the store as a [`CartObserver`]
//! and writes into whatever [`BadgeHost`] the page provides.

use std::cell::RefCell;
use std::rc::Rc;

use crate::observer::CartObserver;
use crate::types::Cart;

/// What the badge should display for a given count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BadgeState {
    /// Visible label: the count, or empty when the cart is empty.
    pub text: String,
    /// Whether the badge is shown.
    pub visible: bool,
}

impl BadgeState {
    /// Badge state for `count`. Non-positive counts hide the badge.
    #[must_use]
    pub fn from_count(count: i64) -> Self {
        if count > 0 {
            Self {
                text: count.to_string(),
                visible: true,
            }
        } else {
            Self::default()
        }
    }
}

/// The writable badge element on a page.
pub trait BadgeSlot {
    /// Replace the visible label.
    fn set_text(&self, text: &str);

    /// Show or hide the element.
    fn set_visible(&self, visible: bool);
}

/// A page that may contain a badge element.
pub trait BadgeHost {
    /// Handle to the located element.
    type Slot: BadgeSlot;

    /// Locate the badge element, or `None` if this page has none.
    fn find_badge(&self) -> Option<Self::Slot>;
}

/// Observer that keeps a page's badge in sync with the cart.
#[derive(Debug, Clone)]
pub struct BadgeRefresher<H> {
    host: H,
}

impl<H: BadgeHost> BadgeRefresher<H> {
    /// Create a refresher writing into `host`.
    #[must_use]
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// Render `count` into the badge.
    ///
    /// Returns `false` when the page has no badge element. Rendering the
    /// same count twice leaves the element in the same state.
    pub fn render(&self, count: i64) -> bool {
        let Some(slot) = self.host.find_badge() else {
            tracing::trace!("No badge element on page");
            return false;
        };

        let state = BadgeState::from_count(count);
        slot.set_text(&state.text);
        slot.set_visible(state.visible);
        true
    }
}

impl<H: BadgeHost> CartObserver for BadgeRefresher<H> {
    fn on_change(&self, cart: &Cart) {
        self.render(cart.total_quantity());
    }
}

/// In-memory badge that records what was rendered into it.
///
/// Acts as both host and element. Clones share state, so one handle can be
/// handed to a [`BadgeRefresher`] and another kept for assertions.
#[derive(Debug, Clone)]
pub struct MemoryBadge {
    inner: Rc<RefCell<MemoryBadgeInner>>,
}

#[derive(Debug, Default)]
struct MemoryBadgeInner {
    attached: bool,
    state: BadgeState,
    renders: usize,
}

impl MemoryBadge {
    /// A page with a badge element, initially empty and hidden.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryBadgeInner {
                attached: true,
                ..MemoryBadgeInner::default()
            })),
        }
    }

    /// A page without a badge element.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryBadgeInner::default())),
        }
    }

    /// Current label and visibility.
    #[must_use]
    pub fn state(&self) -> BadgeState {
        self.inner.borrow().state.clone()
    }

    /// Current label.
    #[must_use]
    pub fn text(&self) -> String {
        self.inner.borrow().state.text.clone()
    }

    /// Whether the badge is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.inner.borrow().state.visible
    }

    /// Number of times the element was located and written.
    #[must_use]
    pub fn renders(&self) -> usize {
        self.inner.borrow().renders
    }
}

impl Default for MemoryBadge {
    fn default() -> Self {
        Self::new()
    }
}

impl BadgeHost for MemoryBadge {
    type Slot = Self;

    fn find_badge(&self) -> Option<Self> {
        let mut inner = self.inner.borrow_mut();
        if !inner.attached {
            return None;
        }
        inner.renders += 1;
        drop(inner);
        Some(self.clone())
    }
}

impl BadgeSlot for MemoryBadge {
    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.inner.borrow_mut().state.text);
    }

    fn set_visible(&self, visible: bool) {
        self.inner.borrow_mut().state.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItem;

    #[test]
    fn test_state_from_count() {
        assert_eq!(
            BadgeState::from_count(6),
            BadgeState {
                text: "6".to_string(),
                visible: true
            }
        );
        assert_eq!(BadgeState::from_count(0), BadgeState::default());
        assert_eq!(BadgeState::from_count(-2), BadgeState::default());
    }

    #[test]
    fn test_render_writes_text_and_visibility() {
        let badge = MemoryBadge::new();
        let refresher = BadgeRefresher::new(badge.clone());

        assert!(refresher.render(3));
        assert_eq!(badge.text(), "3");
        assert!(badge.is_visible());

        assert!(refresher.render(0));
        assert_eq!(badge.text(), "");
        assert!(!badge.is_visible());
    }

    #[test]
    fn test_render_without_badge_is_noop() {
        let badge = MemoryBadge::detached();
        let refresher = BadgeRefresher::new(badge.clone());

        assert!(!refresher.render(5));
        assert_eq!(badge.state(), BadgeState::default());
        assert_eq!(badge.renders(), 0);
    }

    #[test]
    fn test_render_is_idempotent() {
        let badge = MemoryBadge::new();
        let refresher = BadgeRefresher::new(badge.clone());

        refresher.render(4);
        let first = badge.state();
        refresher.render(4);
        assert_eq!(badge.state(), first);
        assert_eq!(badge.renders(), 2);
    }

    #[test]
    fn test_observer_uses_total_quantity() {
        let badge = MemoryBadge::new();
        let refresher = BadgeRefresher::new(badge.clone());
        let cart: Cart = vec![
            LineItem::new("a", "", 0.0, "", 5),
            LineItem::new("b", "", 0.0, "", 1),
        ]
        .into();

        refresher.on_change(&cart);
        assert_eq!(badge.text(), "6");
    }
}
