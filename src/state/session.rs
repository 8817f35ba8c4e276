//! Navigation and session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component owns one `SessionState`. Before login it tracks which
//! anonymous screen the user asked for; once a session exists every render
//! routes to the feed regardless of the requested screen.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::SessionStore;

/// Screens the application can render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Login,
    Register,
    Feed,
}

/// A logged-in session: the bearer token plus the username it was issued for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
}

/// Requested screen plus the current session, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    requested: Screen,
    session: Option<Session>,
}

impl SessionState {
    /// Start from whatever session the store persisted on a previous visit.
    pub fn restore(store: &impl SessionStore) -> Self {
        let session = store.load();
        let requested = if session.is_some() { Screen::Feed } else { Screen::Home };
        Self { requested, session }
    }

    /// The screen to render right now.
    pub fn screen(&self) -> Screen {
        match (self.is_authenticated(), self.requested) {
            (true, _) => Screen::Feed,
            (false, Screen::Feed) => Screen::Home,
            (false, requested) => requested,
        }
    }

    /// Follow an explicit navigation link.
    ///
    /// Anonymous screens are unreachable while a session exists; the request
    /// is recorded but `screen()` keeps answering `Feed`.
    pub fn navigate(&mut self, to: Screen) {
        self.requested = to;
    }

    /// Record a successful login and persist it.
    pub fn sign_in(&mut self, session: Session, store: &impl SessionStore) {
        store.save(&session);
        self.session = Some(session);
        self.requested = Screen::Feed;
    }

    /// Drop the session, clear it from the store, and return home.
    pub fn sign_out(&mut self, store: &impl SessionStore) {
        store.clear();
        self.session = None;
        self.requested = Screen::Home;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Token for the `Authorization` header, when logged in.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Username used to recognize the current user's likes, retweets, and posts.
    pub fn username(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.username.as_str())
    }
}
