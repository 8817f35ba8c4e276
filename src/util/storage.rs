//! Browser `localStorage` persistence for the login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is stored raw under the `token` key so it survives reloads; the
//! username sits next to it under `username`. Storage access is best-effort:
//! a missing window or disabled storage degrades to "not logged in".

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::config::{TOKEN_STORAGE_KEY, USERNAME_STORAGE_KEY};
use crate::state::session::Session;

/// Where the session survives page reloads.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// `SessionStore` backed by `window.localStorage`. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Option<Session> {
        let token = read_item(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty())?;
        let username = read_item(USERNAME_STORAGE_KEY).unwrap_or_default();
        Some(Session { token, username })
    }

    fn save(&self, session: &Session) {
        write_item(TOKEN_STORAGE_KEY, &session.token);
        write_item(USERNAME_STORAGE_KEY, &session.username);
    }

    fn clear(&self) {
        remove_item(TOKEN_STORAGE_KEY);
        remove_item(USERNAME_STORAGE_KEY);
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn read_item(key: &str) -> Option<String> {
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

fn write_item(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

fn remove_item(key: &str) {
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
