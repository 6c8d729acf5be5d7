//! Key-value persistence behind the login gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lockout and session state survive reloads through browser `localStorage`.
//! Callers talk to the `KeyValueStore` trait so the backend can be swapped
//! for the in-memory map used by tests and server rendering.
//!
//! TRADE-OFFS
//! ==========
//! Browser writes are best-effort: quota or privacy-mode failures are logged
//! and dropped rather than surfaced to the login form.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Keys persisted by the login gate. Values are always strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    IsLoggedIn,
    LoginTime,
    LoginAttempts,
    LockTime,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::IsLoggedIn,
        StorageKey::LoginTime,
        StorageKey::LoginAttempts,
        StorageKey::LockTime,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::IsLoggedIn => "isLoggedIn",
            StorageKey::LoginTime => "loginTime",
            StorageKey::LoginAttempts => "loginAttempts",
            StorageKey::LockTime => "lockTime",
        }
    }
}

/// Minimal string store (get/set/remove).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: StorageKey) -> Option<String>;
    fn set(&self, key: StorageKey, value: &str);
    fn remove(&self, key: StorageKey);
}

/// Read `key` as an integer. Malformed values read as absent.
pub fn get_i64(store: &dyn KeyValueStore, key: StorageKey) -> Option<i64> {
    let raw = store.get(key)?;
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring malformed {} value {raw:?}", key.as_str());
            None
        }
    }
}

/// `window.localStorage`. A no-op outside the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: StorageKey) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key.as_str()).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: StorageKey, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; dropping {}", key.as_str());
                return;
            };
            if storage.set_item(key.as_str(), value).is_err() {
                log::warn!("localStorage rejected write of {}", key.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: StorageKey) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; cannot remove {}", key.as_str());
                return;
            };
            if storage.remove_item(key.as_str()).is_err() {
                log::warn!("localStorage rejected removal of {}", key.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Process-local store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<StorageKey, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    fn set(&self, key: StorageKey, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value.to_owned());
    }

    fn remove(&self, key: StorageKey) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key);
    }
}
