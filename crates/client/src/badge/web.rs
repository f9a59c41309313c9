//! Badge rendered into a DOM element.

use arcana_cart_core::{BadgeHost, BadgeSlot};
use wasm_bindgen::JsCast;

/// The page element matched by a CSS selector.
///
/// The element is looked up on every render, so a badge added to the page
/// after the store was created is still found.
#[derive(Debug, Clone)]
pub struct DomBadge {
    document: web_sys::Document,
    selector: String,
}

impl DomBadge {
    /// Badge located by `selector` in `document`.
    pub fn new(document: web_sys::Document, selector: impl Into<String>) -> Self {
        Self {
            document,
            selector: selector.into(),
        }
    }

    /// Badge located by `selector` in the current window's document.
    ///
    /// Returns `None` outside a window context.
    pub fn from_window(selector: impl Into<String>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document, selector))
    }
}

impl BadgeHost for DomBadge {
    type Slot = DomBadgeSlot;

    fn find_badge(&self) -> Option<DomBadgeSlot> {
        let element = self.document.query_selector(&self.selector).ok().flatten()?;
        element.dyn_into::<web_sys::HtmlElement>().ok().map(DomBadgeSlot)
    }
}

/// A located badge element.
#[derive(Debug, Clone)]
pub struct DomBadgeSlot(web_sys::HtmlElement);

impl BadgeSlot for DomBadgeSlot {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_visible(&self, visible: bool) {
        self.0.set_hidden(!visible);
    }
}
