//! Quantity normalization.

/// Smallest quantity a line item may be set to.
const MIN_QUANTITY: i64 = 1;

/// Normalize a requested quantity to a whole number of at least one.
///
/// Fractions are floored, anything below one becomes one. `NaN` is treated
/// as one and infinities saturate at the `i64` bounds.
///
/// ```
/// use arcana_cart_core::clamp_quantity;
///
/// assert_eq!(clamp_quantity(3.9), 3);
/// assert_eq!(clamp_quantity(0.0), 1);
/// assert_eq!(clamp_quantity(-4.0), 1);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)] // float-to-int `as` saturates
pub fn clamp_quantity(qty: f64) -> i64 {
    (qty.floor() as i64).max(MIN_QUANTITY)
}
