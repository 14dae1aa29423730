//! Credential slot shared by the transport, the route guard, and the menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token and role live in browser `localStorage` under fixed keys. A
//! `Session` handle is constructed once in `App` and passed explicitly to every
//! consumer, so nothing reads storage through ambient globals. Reads hit the
//! store every time; no value is cached here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "type";

/// Synchronous key-value storage backing a [`Session`].
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Every operation is a no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl CredentialStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-process store used by tests and server rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        // A poisoned lock reads as an empty slot.
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}

/// Cheap-to-clone handle onto the credential slot.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: impl CredentialStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Session backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Raw token read. `Some("")` is still a stored token.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Token suitable for an `Authorization` header: present and non-empty.
    pub fn bearer_token(&self) -> Option<String> {
        self.token().filter(|t| !t.is_empty())
    }

    pub fn role(&self) -> Option<String> {
        self.store.get(ROLE_KEY)
    }

    /// A stored token of any value counts as authenticated. No expiry is checked.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist credentials returned by a successful login.
    pub fn store_credentials(&self, token: &str, role: Option<&str>) {
        self.store.set(TOKEN_KEY, token);
        match role {
            Some(role) => self.store.set(ROLE_KEY, role),
            None => self.store.remove(ROLE_KEY),
        }
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(ROLE_KEY);
    }
}
