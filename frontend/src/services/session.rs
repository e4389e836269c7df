//! Browser-side session plumbing: the auth guard bound to localStorage.

use common::auth::{AuthGuard, TokenStore};

/// Token store over the browser's `localStorage`. Storage failures (e.g.
/// blocked third-party storage) degrade to "no token".
pub struct LocalTokenStore;

impl LocalTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Auth guard over localStorage. Stateless and cheap to construct wherever
/// a page needs it.
pub fn session() -> AuthGuard<LocalTokenStore> {
    AuthGuard::new(LocalTokenStore)
}
