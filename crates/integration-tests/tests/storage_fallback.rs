//! Malformed and legacy slot contents.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use arcana_cart_core::MemoryStorage;
use arcana_cart_integration_tests::{KEY, card, file_store, store_with_badge};

#[test]
fn test_non_array_content_reads_empty() {
    let storage = MemoryStorage::new();
    storage.set(KEY, r#"{"a":{"qty":2}}"#);
    let (store, badge) = store_with_badge(storage);

    assert!(store.load().is_empty());
    assert_eq!(store.count(), 0);

    store.initialize();
    assert_eq!(badge.text(), "");
    assert!(!badge.is_visible());
}

#[test]
fn test_garbage_file_reads_empty() {
    let (dir, store, _) = file_store();
    std::fs::write(dir.path().join("cart.json"), "<html>oops</html>").unwrap();

    assert!(store.load().is_empty());
    assert_eq!(store.count(), 0);
}

#[test]
fn test_non_utf8_file_reads_empty() {
    let (dir, store, _) = file_store();
    std::fs::write(dir.path().join("cart.json"), [0xc3, 0x28]).unwrap();

    assert_eq!(store.count(), 0);
}

#[test]
fn test_malformed_slot_is_replaced_on_write() {
    let storage = MemoryStorage::new();
    storage.set(KEY, "not json at all");
    let (store, _) = store_with_badge(storage.clone());

    store.add_item(card("a", 1)).unwrap();
    assert_eq!(store.count(), 1);
    assert!(storage.get(KEY).unwrap().starts_with('['));
}

#[test]
fn test_legacy_items_without_display_fields() {
    let storage = MemoryStorage::new();
    storage.set(KEY, r#"[{"id":"a","qty":2},{"id":"b","qty":1,"price":3.25}]"#);
    let (store, _) = store_with_badge(storage);

    assert_eq!(store.count(), 3);
    let b = store.get("b").unwrap();
    assert!((b.price - 3.25).abs() < f64::EPSILON);
    assert!(b.name.is_empty());
}

#[test]
fn test_one_bad_item_empties_the_cart() {
    let storage = MemoryStorage::new();
    storage.set(KEY, r#"[{"id":"a","qty":2},{"id":"b"}]"#);
    let (store, _) = store_with_badge(storage);

    assert!(store.load().is_empty());
}

#[test]
fn test_remove_on_malformed_slot_writes_empty_array() {
    let storage = MemoryStorage::new();
    storage.set(KEY, "42");
    let (store, _) = store_with_badge(storage.clone());

    assert!(!store.remove_item("a").unwrap());
    assert_eq!(storage.get(KEY).as_deref(), Some("[]"));
}
