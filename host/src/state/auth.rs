#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use session::{NavBarProps, Session, SessionMirror};

/// Host-side view of the shared session, provided as `RwSignal<AuthState>`.
///
/// Written only by the session mirror; pages read it and go through the
/// mirror for every change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
}

impl From<Session> for AuthState {
    fn from(session: Session) -> Self {
        Self { session }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    /// Label for greetings; falls back to a generic word for odd profiles.
    #[must_use]
    pub fn greeting_name(&self) -> String {
        self.session.display_name().unwrap_or("회원").to_owned()
    }

    #[must_use]
    pub fn nav_props(&self) -> NavBarProps {
        NavBarProps::from(&self.session)
    }
}

/// The app's session mirror, kept in the reactive arena so event handlers
/// can reach it. Disposed (and unsubscribed) with the app shell.
pub type SessionHandle = StoredValue<Option<SessionMirror>, LocalStorage>;

/// Run `f` against the mounted mirror, if the shell has one.
pub fn with_mirror<R>(handle: SessionHandle, f: impl FnOnce(&SessionMirror) -> R) -> Option<R> {
    handle.try_with_value(|mirror| mirror.as_ref().map(f)).flatten()
}
