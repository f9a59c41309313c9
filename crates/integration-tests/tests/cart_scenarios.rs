//! End-to-end cart sequences.
//!
//! The same scenario runs over the in-memory slot and the file-backed slot
//! to check both backends behave identically.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use arcana_cart_client::FileStorage;
use arcana_cart_core::{CartStorage, CartStore, MemoryStorage};
use arcana_cart_integration_tests::{KEY, card, file_store, quantities, store_with_badge};

fn pairs(expected: &[(&str, i64)]) -> Vec<(String, i64)> {
    expected
        .iter()
        .map(|(id, qty)| ((*id).to_string(), *qty))
        .collect()
}

/// Add a×2, b×1, a×3; clamp b to 1; remove a.
fn run_scenario<S: CartStorage>(store: &CartStore<S>) {
    store.add_item(card("a", 2)).unwrap();
    store.add_item(card("b", 1)).unwrap();
    store.add_item(card("a", 3)).unwrap();
    assert_eq!(quantities(store), pairs(&[("a", 5), ("b", 1)]));
    assert_eq!(store.count(), 6);

    assert!(store.set_quantity("b", 0.0).unwrap());
    assert_eq!(store.get("b").unwrap().qty, 1);
    assert_eq!(store.count(), 6);

    assert!(store.remove_item("a").unwrap());
    assert_eq!(quantities(store), pairs(&[("b", 1)]));
    assert_eq!(store.count(), 1);
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn test_scenario_in_memory() {
    let (store, badge) = store_with_badge(MemoryStorage::new());
    run_scenario(&store);
    assert_eq!(badge.text(), "1");
    assert!(badge.is_visible());
}

#[test]
fn test_scenario_on_disk() {
    let (_dir, store, badge) = file_store();
    run_scenario(&store);
    assert_eq!(badge.text(), "1");
}

#[test]
fn test_disk_slot_survives_new_store() {
    let (dir, store, _) = file_store();
    store.add_item(card("a", 2)).unwrap();
    store.add_item(card("b", 4)).unwrap();
    drop(store);

    let reopened = CartStore::new(FileStorage::new(dir.path()), KEY);
    assert_eq!(reopened.count(), 6);
    assert_eq!(quantities(&reopened), pairs(&[("a", 2), ("b", 4)]));
}

#[test]
fn test_disk_format_is_json_array() {
    let (dir, store, _) = file_store();
    store.add_item(card("a", 2)).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "a");
    assert_eq!(items[0]["name"], "Card a");
    assert_eq!(items[0]["price"], 1.5);
    assert_eq!(items[0]["image"], "assets/cards/a.png");
    assert_eq!(items[0]["qty"], 2);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_distinct_adds_keep_first_insertion_order() {
    let (store, _) = store_with_badge(MemoryStorage::new());
    let ids = ["m", "c", "x", "a", "q"];
    for (qty, id) in (1_i64..).zip(ids) {
        store.add_item(card(id, qty)).unwrap();
    }

    let expected: Vec<(String, i64)> = (1_i64..)
        .zip(ids)
        .map(|(qty, id)| (id.to_string(), qty))
        .collect();
    assert_eq!(quantities(&store), expected);
    assert_eq!(store.count(), 15);
}

#[test]
fn test_remove_is_idempotent() {
    let (store, _) = store_with_badge(MemoryStorage::new());
    store.add_item(card("a", 1)).unwrap();
    store.add_item(card("b", 1)).unwrap();

    store.remove_item("a").unwrap();
    let once = store.load();
    store.remove_item("a").unwrap();
    assert_eq!(store.load(), once);
    assert_eq!(once.len(), 1);
}

#[test]
fn test_set_quantity_missing_id_leaves_bytes_unchanged() {
    let storage = MemoryStorage::new();
    let (store, _) = store_with_badge(storage.clone());
    store.add_item(card("a", 3)).unwrap();
    let before = storage.get(KEY).unwrap();

    assert!(!store.set_quantity("zzz", 9.0).unwrap());
    assert_eq!(storage.get(KEY).unwrap(), before);
}

#[test]
fn test_save_of_load_is_identity() {
    let (_dir, store, _) = file_store();
    store.add_item(card("a", 2)).unwrap();
    store.add_item(card("b", 1)).unwrap();

    let loaded = store.load();
    store.save(&loaded).unwrap();
    assert_eq!(store.load(), loaded);
}

#[test]
fn test_count_of_cleared_slot_is_zero() {
    let (_dir, store, _) = file_store();
    assert_eq!(store.count(), 0);
    store.add_item(card("a", 2)).unwrap();
    store.clear().unwrap();
    assert_eq!(store.count(), 0);
    assert!(store.load().is_empty());
}
