//! Cart commands.
//!
//! Mutating commands rely on the store's badge observer for their output;
//! read-only commands write to the given writer.

use std::io::Write;

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use thiserror::Error;
use tracing::info;

use arcana_cart_core::{Cart, CartStorage, CartStore, ItemId, ItemIdError, LineItem, StorageError};

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The item id given on the command line is not usable.
    #[error("Invalid item id: {0}")]
    InvalidId(#[from] ItemIdError),

    /// The cart could not be written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Writing command output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Encoding the cart for display failed.
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Add `qty` of an item.
///
/// # Errors
///
/// Returns an error if the id is blank or the cart cannot be saved.
pub fn add<S: CartStorage>(
    store: &CartStore<S>,
    id: &str,
    name: String,
    price: f64,
    image: String,
    qty: i64,
) -> Result<(), CommandError> {
    let id = ItemId::parse(id)?;
    info!(%id, qty, "Adding item");
    store.add_item(LineItem {
        id,
        name,
        price,
        image,
        qty,
    })?;
    Ok(())
}

/// Set an item's quantity.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output fails.
pub fn set<S: CartStorage, W: Write>(
    store: &CartStore<S>,
    out: &mut W,
    id: &str,
    qty: f64,
) -> Result<(), CommandError> {
    if !store.set_quantity(id, qty)? {
        writeln!(out, "No item `{id}` in cart")?;
    }
    Ok(())
}

/// Remove an item.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved or output fails.
pub fn remove<S: CartStorage, W: Write>(
    store: &CartStore<S>,
    out: &mut W,
    id: &str,
) -> Result<(), CommandError> {
    if !store.remove_item(id)? {
        writeln!(out, "No item `{id}` in cart")?;
    }
    Ok(())
}

/// Print the total quantity.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn count<S: CartStorage, W: Write>(
    store: &CartStore<S>,
    out: &mut W,
) -> Result<(), CommandError> {
    writeln!(out, "{}", store.count())?;
    Ok(())
}

/// List the cart as a table, or as its stored JSON.
///
/// # Errors
///
/// Returns an error if output fails.
pub fn show<S: CartStorage, W: Write>(
    store: &CartStore<S>,
    out: &mut W,
    json: bool,
) -> Result<(), CommandError> {
    let cart = store.load();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&cart)?)?;
        return Ok(());
    }

    if cart.is_empty() {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }

    writeln!(out, "{}", cart_table(&cart))?;
    writeln!(out, "Total quantity: {}", cart.total_quantity())?;
    Ok(())
}

/// Delete the cart slot.
///
/// # Errors
///
/// Returns an error if the slot cannot be removed.
pub fn clear<S: CartStorage>(store: &CartStore<S>) -> Result<(), CommandError> {
    info!(key = store.key(), "Clearing cart");
    store.clear()?;
    Ok(())
}

fn cart_table(cart: &Cart) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Price", "Qty", "Image"]);

    for item in cart {
        table.add_row(vec![
            item.id.to_string(),
            item.name.clone(),
            format!("{:.2}", item.price),
            item.qty.to_string(),
            item.image.clone(),
        ]);
    }
    table
}
