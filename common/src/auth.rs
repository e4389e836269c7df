//! Admin session handling.
//!
//! Authentication here is a client-side UI gate, not a security boundary:
//! the credential pair is a constant embedded in the client, and the token
//! is an unsigned string whose mere presence in the store means "logged
//! in". No server ever validates it. This mirrors the behavior the rest of
//! the app is written against, so keep the contract intact.

use chrono::Utc;
use uuid::Uuid;

/// Fixed admin credential pair.
pub const ADMIN_EMAIL: &str = "labib420agent@gmail.com";
pub const ADMIN_PASSWORD: &str = "yashverma";

/// Key under which the session token is persisted.
pub const AUTH_TOKEN_KEY: &str = "unwearble_auth_token";

/// Persistent client-side key-value store holding the session token.
/// The browser implementation wraps `localStorage`; tests use a map.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Gate for the admin area.
pub struct AuthGuard<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> AuthGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Compares against the fixed pair. On match persists a fresh token and
    /// returns `true`; on mismatch nothing is stored.
    pub fn login(&self, email: &str, password: &str) -> bool {
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            self.store.set(AUTH_TOKEN_KEY, &generate_token());
            true
        } else {
            false
        }
    }

    /// Removes the token unconditionally. Safe to call when already logged
    /// out.
    pub fn logout(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
    }

    /// Token presence only; the contents are never inspected.
    pub fn is_authenticated(&self) -> bool {
        self.store.get(AUTH_TOKEN_KEY).is_some()
    }
}

/// Opaque token: a random part plus the creation timestamp. Nothing
/// verifies it.
fn generate_token() -> String {
    format!(
        "{}_{}",
        Uuid::new_v4().simple(),
        Utc::now().timestamp_millis()
    )
}
