//! File-backed token store persistence.

use linkpouch::auth::{FileTokenStore, TokenPair, TokenStore};

#[test]
fn roundtrip_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokens.json");

    let store = FileTokenStore::open(&path).unwrap();
    assert_eq!(store.path(), path);
    assert_eq!(store.access_token(), None);

    store.set_tokens(&TokenPair::new("access-1", "refresh-1"));
    assert_eq!(store.access_token().as_deref(), Some("access-1"));

    // A fresh open reads what the previous instance persisted.
    drop(store);
    let reopened = FileTokenStore::open(&path).unwrap();
    assert_eq!(reopened.access_token().as_deref(), Some("access-1"));
    assert_eq!(reopened.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn clear_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokens.json");

    let store = FileTokenStore::open(&path).unwrap();
    store.set_tokens(&TokenPair::new("a", "r"));
    store.clear();
    drop(store);

    let reopened = FileTokenStore::open(&path).unwrap();
    assert_eq!(reopened.access_token(), None);
    assert_eq!(reopened.refresh_token(), None);
}

#[test]
fn missing_file_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTokenStore::open(dir.path().join("nested").join("tokens.json")).unwrap();
    assert_eq!(store.access_token(), None);
}

#[test]
fn malformed_file_starts_empty_and_recovers_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tokens.json");
    std::fs::write(&path, "not json").unwrap();

    let store = FileTokenStore::open(&path).unwrap();
    assert_eq!(store.access_token(), None);

    store.set_tokens(&TokenPair::new("a", "r"));
    drop(store);
    let reopened = FileTokenStore::open(&path).unwrap();
    assert_eq!(reopened.access_token().as_deref(), Some("a"));
}
