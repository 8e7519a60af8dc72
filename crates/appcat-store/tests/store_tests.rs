use std::fs;

use appcat::CatalogItem;
use appcat_store::{CatalogStore, StoreError};

fn item(id: &str, name: &str, category: Option<&str>) -> CatalogItem {
    CatalogItem::new(id, name, category.map(str::to_owned))
}

fn seeded_store() -> CatalogStore {
    let store = CatalogStore::open_in_memory().unwrap();
    store
        .insert_item(&item("firefox", "Firefox", Some("Browsers")))
        .unwrap();
    store
        .insert_item(&item("chromium", "Chromium", Some("Browsers")))
        .unwrap();
    store
        .insert_item(&item("vlc", "VLC Media Player", Some("Utilities")))
        .unwrap();
    store.insert_item(&item("misc", "Oddball", None)).unwrap();
    store
}

#[test]
fn items_are_ordered_by_name() {
    let store = seeded_store();
    let items = store.items().unwrap();

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Chromium", "Firefox", "Oddball", "VLC Media Player"]);
}

#[test]
fn search_matches_name_and_category() {
    let store = seeded_store();

    let by_name = store.search("fire").unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "firefox");

    let by_category = store.search("Browsers").unwrap();
    assert_eq!(by_category.len(), 2);

    let no_match = store.search("zzzz").unwrap();
    assert!(no_match.is_empty());
}

#[test]
fn categories_are_distinct_and_sorted() {
    let store = seeded_store();
    assert_eq!(store.categories().unwrap(), vec!["Browsers", "Utilities"]);
}

#[test]
fn item_count_matches_rows() {
    let store = seeded_store();
    assert_eq!(store.item_count().unwrap(), 4);
}

#[test]
fn insert_replaces_existing_id() {
    let store = seeded_store();
    store
        .insert_item(&item("firefox", "Firefox ESR", Some("Browsers")))
        .unwrap();

    assert_eq!(store.item_count().unwrap(), 4);
    let found = store.search("ESR").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "firefox");
}

#[test]
fn create_then_reopen_read_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sql.db");

    {
        let store = CatalogStore::create(&path).unwrap();
        store
            .insert_item(&item("firefox", "Firefox", Some("Browsers")))
            .unwrap();
    }

    let store = CatalogStore::open_read_only(&path).unwrap();
    assert_eq!(store.item_count().unwrap(), 1);
    assert_eq!(store.items().unwrap()[0].name, "Firefox");
}

#[test]
fn read_only_handle_rejects_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sql.db");
    CatalogStore::create(&path).unwrap();

    let store = CatalogStore::open_read_only(&path).unwrap();
    let result = store.insert_item(&item("x", "X", None));

    assert!(matches!(result, Err(StoreError::Database(_))));
}

#[test]
fn missing_file_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.db");

    let result = CatalogStore::open_read_only(&path);
    assert!(matches!(result, Err(StoreError::Missing(_))));
}

#[test]
fn non_database_file_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.db");
    fs::write(&path, "this is not a sqlite database, not even close").unwrap();

    let result = CatalogStore::open_read_only(&path);
    assert!(matches!(result, Err(StoreError::Invalid { .. })));
}

#[test]
fn empty_catalog_lists_nothing() {
    let store = CatalogStore::open_in_memory().unwrap();
    assert!(store.items().unwrap().is_empty());
    assert!(store.categories().unwrap().is_empty());
    assert_eq!(store.item_count().unwrap(), 0);
}
