//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the single source of truth for "is the user logged in".
//! Route guards and user-aware components read it; only `Session::login` and
//! `Session::logout` mutate it. Both persist to localStorage in the same
//! synchronous step, so the in-memory record and durable storage never
//! disagree within a tab.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage;

/// localStorage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// localStorage key holding the serialized user profile.
pub const USER_KEY: &str = "user";

/// In-memory session record: bearer token plus profile snapshot.
///
/// The two fields are set and cleared together; a present token always
/// carries a fully populated user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    /// Derived flag: authenticated iff a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Overwrite both fields with a fresh credential and profile.
    pub fn login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop both fields.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

/// Shared handle to the session signal, provided via context from `App`.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Create the session for this tab, rehydrating from localStorage when a
    /// prior login persisted both keys. A missing or unparseable key means
    /// logged out; rehydration never errors.
    pub fn restore() -> Self {
        let mut state = SessionState::default();
        if let (Some(token), Some(user)) = (
            storage::load_string(TOKEN_KEY),
            storage::load_json::<User>(USER_KEY),
        ) {
            state.login(token, user);
        }
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Snapshot of the current state (reactive read).
    pub fn get(self) -> SessionState {
        self.state.get()
    }

    pub fn user(self) -> Option<User> {
        self.state.get().user
    }

    pub fn token(self) -> Option<String> {
        self.state.get().token
    }

    pub fn is_authenticated(self) -> bool {
        self.state.get().is_authenticated()
    }

    /// Record a successful login: update the signal and persist both keys.
    /// The token is stored as an opaque string; no client-side verification.
    pub fn login(self, token: String, user: User) {
        storage::save_string(TOKEN_KEY, &token);
        storage::save_json(USER_KEY, &user);
        self.state.update(|state| state.login(token, user));
    }

    /// Clear the session and erase persisted storage.
    pub fn logout(self) {
        storage::remove(TOKEN_KEY);
        storage::remove(USER_KEY);
        self.state.update(SessionState::clear);
    }
}

/// Fetch the session handle provided by `App`.
pub fn use_session() -> Session {
    expect_context::<Session>()
}
