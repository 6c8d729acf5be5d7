use super::*;

// =============================================================
// StorageKey
// =============================================================

#[test]
fn storage_keys_use_browser_key_names() {
    let names: Vec<_> = StorageKey::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(names, ["isLoggedIn", "loginTime", "loginAttempts", "lockTime"]);
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());

    store.set(StorageKey::LoginAttempts, "2");
    assert_eq!(store.get(StorageKey::LoginAttempts).as_deref(), Some("2"));
    assert_eq!(store.len(), 1);

    store.remove(StorageKey::LoginAttempts);
    assert_eq!(store.get(StorageKey::LoginAttempts), None);
    assert!(store.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let other = store.clone();
    store.set(StorageKey::IsLoggedIn, "true");
    assert_eq!(other.get(StorageKey::IsLoggedIn).as_deref(), Some("true"));
}

#[test]
fn get_i64_parses_and_ignores_garbage() {
    let store = MemoryStorage::new();
    store.set(StorageKey::LockTime, "1700000000000");
    assert_eq!(get_i64(&store, StorageKey::LockTime), Some(1_700_000_000_000));

    store.set(StorageKey::LockTime, "soon");
    assert_eq!(get_i64(&store, StorageKey::LockTime), None);

    assert_eq!(get_i64(&store, StorageKey::LoginTime), None);
}

// =============================================================
// BrowserStorage (non-browser build)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    let store = BrowserStorage;
    store.set(StorageKey::IsLoggedIn, "true");
    assert_eq!(store.get(StorageKey::IsLoggedIn), None);
    store.remove(StorageKey::IsLoggedIn);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_remove_without_backend_is_inert() {
    let store = BrowserStorage;
    for key in StorageKey::ALL {
        store.remove(key);
        assert_eq!(store.get(key), None);
    }
}
