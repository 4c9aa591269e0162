//! Persisted bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the session (`state::session`) writes the credential; the HTTP
//! pipeline reads it through the session when attaching `Authorization`.
//! Validity is never checked locally: the backend's 401 is the only signal
//! that a stored token is dead.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Storage for at most one credential.
pub trait TokenStore: Send + Sync {
    /// Current token, or `None` when nothing (or an empty value) is stored.
    fn get(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn set(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// Process-local store used in tests and during server rendering.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Browser cookie store (`document.cookie`).
///
/// The cookie carries no `Expires`; it lives until cleared or the browser
/// drops it.
#[derive(Debug, Clone, Copy)]
pub struct CookieTokenStore {
    name: &'static str,
}

impl Default for CookieTokenStore {
    fn default() -> Self {
        Self { name: TOKEN_COOKIE }
    }
}

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = html_document()?.cookie().ok()?;
            parse_cookie(&raw, self.name)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self.name;
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&cookie_assignment(self.name, token));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&cookie_removal(self.name));
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast as _;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Store the app should use in the current build: the cookie in the
/// browser, memory during server rendering.
pub fn default_token_store() -> Arc<dyn TokenStore> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(CookieTokenStore::default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryTokenStore::default())
    }
}

/// Find `name` in a `document.cookie` string.
pub fn parse_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// `document.cookie` assignment that stores `value` site-wide.
pub fn cookie_assignment(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/; SameSite=Lax")
}

/// `document.cookie` assignment that deletes `name`.
pub fn cookie_removal(name: &str) -> String {
    format!("{name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT; SameSite=Lax")
}
