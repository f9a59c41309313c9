//! Cart line item.

use serde::{Deserialize, Deserializer, Serialize};

use super::ItemId;

/// One product entry in the cart.
///
/// Only `id` and `qty` take part in cart logic. `name`, `price` and `image`
/// are carried for display and default to empty values when missing from
/// stored content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Identity of the entry within the cart.
    pub id: ItemId,
    /// Display label.
    #[serde(default)]
    pub name: String,
    /// Unit price. Non-finite prices are written as `null` and read back
    /// as zero.
    #[serde(default, deserialize_with = "price_or_zero")]
    pub price: f64,
    /// Display asset path or URL.
    #[serde(default)]
    pub image: String,
    /// Quantity. Not clamped on insert, so this may be zero or negative if a
    /// caller adds such an item.
    pub qty: i64,
}

impl LineItem {
    /// Create a new line item.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: f64,
        image: impl Into<String>,
        qty: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            qty,
        }
    }
}

fn price_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}
