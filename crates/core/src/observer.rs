//! Change notification port.

use crate::types::Cart;

/// Receives the cart whenever the store changes it or is asked to resync.
///
/// The UI layer subscribes through this trait instead of the store calling
/// into any UI API directly. Closures taking `&Cart` implement it and
/// receive both kinds of notification.
///
/// | Operation | Callback |
/// |---|---|
/// | successful save (`add_item`, `set_quantity`, `remove_item`, `save`) | `on_change` |
/// | successful `clear` | `on_change` with an empty cart |
/// | `refresh_badge`, `initialize` | `on_refresh` |
/// | failed write, `set_quantity` miss, `load`, `count`, `get` | none |
pub trait CartObserver {
    /// Called with the cart exactly as it now stands in the slot, after a
    /// successful write or slot removal.
    fn on_change(&self, cart: &Cart);

    /// Called with the stored cart when a resync is requested and nothing
    /// was written. Defaults to [`on_change`](Self::on_change).
    fn on_refresh(&self, cart: &Cart) {
        self.on_change(cart);
    }
}

impl<F> CartObserver for F
where
    F: Fn(&Cart),
{
    fn on_change(&self, cart: &Cart) {
        self(cart);
    }
}
