//! The cart: an ordered, id-unique list of line items.

use serde::{Deserialize, Serialize};

use super::{ItemId, LineItem, clamp_quantity};

/// Ordered collection of [`LineItem`]s keyed by [`ItemId`].
///
/// Insertion order is preserved. The operations here are pure; persistence
/// and change notification belong to [`CartStore`](crate::CartStore).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart(Vec<LineItem>);

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add an item, accumulating quantity onto an existing entry with the
    /// same id.
    ///
    /// An existing entry keeps its own name, price and image. A new entry is
    /// appended as given, without clamping its quantity.
    pub fn add(&mut self, item: LineItem) {
        match self.0.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.qty = existing.qty.saturating_add(item.qty),
            None => self.0.push(item),
        }
    }

    /// Set the quantity of the entry with `id` to `max(1, floor(qty))`.
    ///
    /// Returns `false` and leaves the cart untouched when no entry matches.
    pub fn set_quantity(&mut self, id: &str, qty: f64) -> bool {
        match self.0.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.qty = clamp_quantity(qty);
                true
            }
            None => false,
        }
    }

    /// Remove every entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|item| item.id != id);
        self.0.len() != before
    }

    /// Sum of quantities across all entries.
    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.0
            .iter()
            .fold(0_i64, |total, item| total.saturating_add(item.qty))
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.0.iter().find(|item| item.id == id)
    }

    /// Whether an entry with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.0
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.0.iter()
    }

    /// Number of distinct entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.0.iter().map(|item| &item.id)
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Self(items)
    }
}

impl FromIterator<LineItem> for Cart {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Cart {
    type Item = LineItem;
    type IntoIter = std::vec::IntoIter<LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
