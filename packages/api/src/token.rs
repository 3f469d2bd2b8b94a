//! Bearer token persistence.
//!
//! In the browser the token lives in `localStorage` under [`TOKEN_KEY`] so a page
//! reload keeps the session. Native builds keep it in memory.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::{Arc, RwLock};

/// `localStorage` key holding the access token.
pub const TOKEN_KEY: &str = "access_token";

#[derive(Clone, Debug, Default)]
pub struct TokenStore {
    #[cfg(not(target_arch = "wasm32"))]
    token: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .ok()?
            .filter(|t| !t.is_empty())
    }

    pub fn set(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                tracing::warn!("could not persist access token");
            }
        }
    }

    pub fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(TOKEN_KEY).is_err() {
                tracing::warn!("could not clear access token");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore {
    pub fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set(&self, token: &str) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token.to_string());
    }

    pub fn clear(&self) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_token() {
        let store = TokenStore::new();
        let other = store.clone();
        assert_eq!(other.get(), None);

        store.set("abc");
        assert_eq!(other.get().as_deref(), Some("abc"));

        other.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_clear_without_token_keeps_store_usable() {
        let store = TokenStore::new();
        store.clear();
        store.clear();
        assert_eq!(store.get(), None);

        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
    }
}
