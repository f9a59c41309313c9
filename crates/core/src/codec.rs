//! JSON encoding of the storage slot.
//!
//! The slot holds a JSON array of line item objects. Decoding is lenient at
//! the slot level: anything that is not such an array decodes to an empty
//! cart.

use crate::error::StorageError;
use crate::types::Cart;

/// Decode raw slot content, falling back to an empty cart.
///
/// `None`, blank input, invalid JSON, and JSON of the wrong shape all yield
/// `Cart::default()`.
///
/// ```
/// use arcana_cart_core::try_deserialize;
///
/// assert!(try_deserialize(None).is_empty());
/// assert!(try_deserialize(Some("{\"id\":\"a\"}")).is_empty());
/// assert_eq!(try_deserialize(Some(r#"[{"id":"a","qty":2}]"#)).len(), 1);
/// ```
#[must_use]
pub fn try_deserialize(raw: Option<&str>) -> Cart {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Cart::default();
    };

    match serde_json::from_str::<Cart>(raw) {
        Ok(cart) => cart,
        Err(e) => {
            tracing::debug!(error = %e, "Malformed cart in storage, treating as empty");
            Cart::default()
        }
    }
}

/// Encode a cart for the storage slot.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] if encoding fails.
pub fn serialize(cart: &Cart) -> Result<String, StorageError> {
    Ok(serde_json::to_string(cart)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::LineItem;

    #[test]
    fn test_absent_and_blank() {
        assert_eq!(try_deserialize(None), Cart::default());
        assert_eq!(try_deserialize(Some("")), Cart::default());
        assert_eq!(try_deserialize(Some("  \n")), Cart::default());
    }

    #[test]
    fn test_wrong_shapes() {
        for raw in [
            "not json",
            "{}",
            "null",
            "42",
            "\"cart\"",
            r#"{"items":[]}"#,
            r#"[{"name":"no id","qty":1}]"#,
            r#"[{"id":"a","qty":"2"}]"#,
            "[1,2,3]",
        ] {
            assert!(try_deserialize(Some(raw)).is_empty(), "expected empty for {raw}");
        }
    }

    #[test]
    fn test_valid_array() {
        let raw = r#"[
            {"id":"a","name":"Ember Drake","price":2.5,"image":"a.png","qty":5},
            {"id":"b","name":"Frost Wisp","price":0.75,"image":"b.png","qty":1}
        ]"#;
        let cart = try_deserialize(Some(raw));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get("a").unwrap().qty, 5);
        assert_eq!(cart.get("b").unwrap().name, "Frost Wisp");
    }

    #[test]
    fn test_empty_array() {
        assert!(try_deserialize(Some("[]")).is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let raw = r#"[{"id":"a","qty":1,"tribe":"Dragon"}]"#;
        assert_eq!(try_deserialize(Some(raw)).len(), 1);
    }

    #[test]
    fn test_reencoding_is_stable() {
        let cart: Cart = vec![
            LineItem::new("a", "Ember Drake", 2.5, "a.png", 5),
            LineItem::new("b", "Frost Wisp", 9.99, "b.png", 1),
        ]
        .into();
        let first = serialize(&cart).unwrap();
        let decoded = try_deserialize(Some(&first));
        assert_eq!(decoded, cart);
        assert_eq!(serialize(&decoded).unwrap(), first);
    }

    #[test]
    fn test_non_finite_price_survives_as_zero() {
        let cart: Cart = vec![LineItem::new("a", "", f64::NAN, "", 1)].into();
        let raw = serialize(&cart).unwrap();
        let decoded = try_deserialize(Some(&raw));
        assert_eq!(decoded.len(), 1);
        assert!(decoded.get("a").unwrap().price.abs() < f64::EPSILON);
    }
}
