//! Badge rendered as a line of terminal output.

use std::cell::{Ref, RefCell};
use std::io::Write;
use std::rc::Rc;

use arcana_cart_core::{BadgeHost, BadgeSlot};

/// Prints `<label>: <count>` whenever the badge is rendered, or
/// `<label>: empty` when the badge is hidden.
///
/// Clones share the same writer.
pub struct TerminalBadge<W> {
    out: Rc<RefCell<W>>,
    label: String,
}

impl<W: Write> TerminalBadge<W> {
    /// Create a badge printing to `out` with the label `cart`.
    pub fn new(out: W) -> Self {
        Self::with_label(out, "cart")
    }

    /// Create a badge printing to `out` with a custom label.
    pub fn with_label(out: W, label: impl Into<String>) -> Self {
        Self {
            out: Rc::new(RefCell::new(out)),
            label: label.into(),
        }
    }

    /// Borrow the underlying writer.
    #[must_use]
    pub fn output(&self) -> Ref<'_, W> {
        self.out.borrow()
    }
}

impl<W> Clone for TerminalBadge<W> {
    fn clone(&self) -> Self {
        Self {
            out: Rc::clone(&self.out),
            label: self.label.clone(),
        }
    }
}

impl<W> std::fmt::Debug for TerminalBadge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalBadge")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<W: Write> BadgeHost for TerminalBadge<W> {
    type Slot = TerminalSlot<W>;

    fn find_badge(&self) -> Option<Self::Slot> {
        Some(TerminalSlot {
            out: Rc::clone(&self.out),
            label: self.label.clone(),
            text: RefCell::new(String::new()),
        })
    }
}

/// A located terminal badge.
///
/// The label is buffered by `set_text` and the line is written by
/// `set_visible`, matching the order `BadgeRefresher` calls them in.
pub struct TerminalSlot<W> {
    out: Rc<RefCell<W>>,
    label: String,
    text: RefCell<String>,
}

impl<W: Write> BadgeSlot for TerminalSlot<W> {
    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.text.borrow_mut());
    }

    fn set_visible(&self, visible: bool) {
        let mut out = self.out.borrow_mut();
        let result = if visible {
            writeln!(out, "{}: {}", self.label, self.text.borrow())
        } else {
            writeln!(out, "{}: empty", self.label)
        };
        if let Err(e) = result.and_then(|()| out.flush()) {
            tracing::warn!(error = %e, "Failed to write badge");
        }
    }
}
