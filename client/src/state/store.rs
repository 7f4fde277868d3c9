//! Persisted auth state: bearer token, mirrored cookie, cached user snapshot.
//!
//! DESIGN
//! ======
//! The token lives in two places: durable storage (read by the API client)
//! and a cookie (the only signal visible to the server's edge guard). Both
//! must move together, so all writes go through [`SessionStore`]: one call
//! persists or clears every representation. Callers cannot drift them apart.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::rc::Rc;

use crate::net::types::User;

/// Durable-storage key for the bearer token.
pub const TOKEN_KEY: &str = "access_token";
/// Durable-storage key for the cached user snapshot.
pub const USER_KEY: &str = "auth_user";
/// Cookie mirrored for the edge guard.
pub const COOKIE_NAME: &str = "access_token";
/// Cookie lifetime: 30 days.
pub const COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 30;

/// Raw key/value + cookie persistence. Implementations must never fail
/// loudly; storage being unavailable degrades to "not signed in".
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
    fn set_cookie(&self, name: &str, value: &str, max_age_secs: u64);
    fn clear_cookie(&self, name: &str);
}

/// Owns every persisted auth fact. Cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn StorageBackend>,
}

impl SessionStore {
    #[must_use]
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store for the current build target: browser storage under `hydrate`,
    /// in-memory otherwise (SSR renders are always anonymous).
    #[must_use]
    pub fn for_runtime() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::new(Rc::new(BrowserStorage))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::in_memory()
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::default()))
    }

    /// Current bearer token, if any. Never fails.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.backend.get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// `Authorization` header pair for the stored token, or `None`.
    #[must_use]
    pub fn auth_header(&self) -> Option<(String, String)> {
        self.token()
            .map(|t| ("Authorization".to_owned(), format!("Bearer {t}")))
    }

    /// Persist the token to durable storage and the edge-guard cookie
    /// together. Idempotent.
    pub fn persist_token(&self, token: &str) {
        self.backend.set_item(TOKEN_KEY, token);
        self.backend.set_cookie(COOKIE_NAME, token, COOKIE_MAX_AGE_SECS);
    }

    /// Cache the user snapshot used for optimistic hydration.
    pub fn persist_user(&self, user: &User) {
        if let Ok(json) = serde_json::to_string(user) {
            self.backend.set_item(USER_KEY, &json);
        }
    }

    /// Cached user snapshot, if present and still parseable.
    #[must_use]
    pub fn cached_user(&self) -> Option<User> {
        let json = self.backend.get_item(USER_KEY)?;
        serde_json::from_str(&json).ok()
    }

    /// Clear token, cookie, and snapshot in one operation. Idempotent.
    pub fn clear_all(&self) {
        self.backend.remove_item(TOKEN_KEY);
        self.backend.remove_item(USER_KEY);
        self.backend.clear_cookie(COOKIE_NAME);
    }
}

/// In-memory backend for SSR and tests.
#[derive(Default)]
pub struct MemoryStorage {
    items: std::cell::RefCell<std::collections::HashMap<String, String>>,
    cookie: std::cell::RefCell<Option<String>>,
}

impl MemoryStorage {
    /// Test hook: current cookie value, if set.
    #[must_use]
    pub fn cookie_value(&self) -> Option<String> {
        self.cookie.borrow().clone()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }

    fn set_cookie(&self, _name: &str, value: &str, _max_age_secs: u64) {
        *self.cookie.borrow_mut() = Some(value.to_owned());
    }

    fn clear_cookie(&self, _name: &str) {
        *self.cookie.borrow_mut() = None;
    }
}

/// Browser backend: `localStorage` plus `document.cookie`.
#[cfg(feature = "hydrate")]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn html_document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn set_cookie(&self, name: &str, value: &str, max_age_secs: u64) {
        if let Some(doc) = Self::html_document() {
            let encoded: String = js_sys::encode_uri_component(value).into();
            let _ = doc.set_cookie(&format!(
                "{name}={encoded}; Path=/; Max-Age={max_age_secs}; SameSite=Lax"
            ));
        }
    }

    fn clear_cookie(&self, name: &str) {
        if let Some(doc) = Self::html_document() {
            let _ = doc.set_cookie(&format!("{name}=; Path=/; Max-Age=0; SameSite=Lax"));
        }
    }
}
