//! Session-token storage for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is issued by the login endpoint and kept in `localStorage`
//! under `token`. The navigation guard only asks whether it is present;
//! pages write it on login and remove it on logout.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior. SSR and native test
//! builds see an empty browser store so server rendering stays deterministic.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

/// `localStorage` key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Read/write access to the persisted session token.
pub trait TokenStore {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;

    /// Whether a usable token is present. An empty stored value counts as absent.
    fn has_token(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }

    /// Persist `token`, replacing any previous value.
    fn store_token(&self, token: &str);

    /// Remove the stored token.
    fn clear_token(&self);
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Token store backed by the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            match local_storage()?.get_item(TOKEN_KEY) {
                Ok(token) => token,
                Err(_) => {
                    leptos::logging::warn!("failed to read session token");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store_token(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    leptos::logging::warn!("failed to persist session token");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(TOKEN_KEY).is_err() {
                    leptos::logging::warn!("failed to remove session token");
                }
            }
        }
    }
}

/// In-process token store for tests and non-browser callers.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn store_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}
