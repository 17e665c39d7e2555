//! Persisted auth token access behind an injectable seam.
//!
//! # Design
//! - The HTTP client and the failure handler only see the trait, so tests
//!   exercise the 401 clear-token path without a browser.

use std::cell::RefCell;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "astral.token";

/// Read/write access to the persisted bearer token.
pub trait TokenStore {
    /// Current token, if one is stored and non-empty.
    fn load(&self) -> Option<String>;
    /// Persist a token, replacing any previous value.
    fn save(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// In-memory token store for native tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    /// Store seeded with an existing token.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Local-storage-backed token store used in the browser.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        use gloo::storage::{LocalStorage, Storage};
        let value = LocalStorage::get::<String>(TOKEN_KEY).ok()?;
        if value.trim().is_empty() {
            return None;
        }
        Some(value)
    }

    fn save(&self, token: &str) {
        use gloo::console;
        use gloo::storage::{LocalStorage, Storage};
        if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
            console::error!("storage operation failed", "set", TOKEN_KEY, err.to_string());
        }
    }

    fn clear(&self) {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::delete(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.load(), None);
        store.save("abc123");
        assert_eq!(store.load().as_deref(), Some("abc123"));
        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn seeded_store_exposes_the_token() {
        let store = MemoryTokenStore::with_token("tok");
        assert_eq!(store.load().as_deref(), Some("tok"));
    }
}
