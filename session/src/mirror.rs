//! Per-component reactive mirror of the shared session.
//!
//! LIFECYCLE
//! =========
//! `mount` reads the store synchronously and pushes the value into the sink
//! before returning, so a component never renders a logged-out frame while a
//! session exists. Afterwards both the same-document channel and the
//! cross-tab storage events trigger a full re-read; the local value is always
//! replaced wholesale. Dropping the mirror releases both subscriptions.

#[cfg(test)]
#[path = "mirror_test.rs"]
mod mirror_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::cross_tab::{StorageEvents, watch_session_keys};
use crate::error::SessionError;
use crate::model::{PendingSignup, Session, User};
use crate::notify::{AuthChanged, ChangeChannel, ChangeReason, Listener, Subscription};
use crate::store::SessionStore;
use crate::LOGOUT_REDIRECT;

/// Client-side route changes, injected so the core stays router-agnostic.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Everything a mirror needs from its environment.
#[derive(Clone)]
pub struct SessionDeps {
    pub store: SessionStore,
    pub channel: Rc<dyn ChangeChannel>,
    pub storage_events: Rc<dyn StorageEvents>,
    pub navigator: Rc<dyn Navigator>,
}

type Sink = Rc<dyn Fn(Session)>;

/// A mounted reader of the shared session.
pub struct SessionMirror {
    deps: SessionDeps,
    state: Rc<RefCell<Session>>,
    sink: Sink,
    _same_tab: Subscription,
    _cross_tab: Subscription,
}

impl SessionMirror {
    /// Read the store, publish the value to `sink`, then start listening.
    pub fn mount(deps: SessionDeps, sink: impl Fn(Session) + 'static) -> Self {
        let initial = deps.store.read();
        let state = Rc::new(RefCell::new(initial.clone()));
        let sink: Sink = Rc::new(sink);
        sink(initial);

        let on_change: Listener = {
            let store = deps.store.clone();
            let state = Rc::clone(&state);
            let sink = Rc::clone(&sink);
            Rc::new(move || publish(&state, &sink, store.read()))
        };
        let same_tab = deps.channel.subscribe(Rc::clone(&on_change));
        let cross_tab = watch_session_keys(&*deps.storage_events, on_change);

        Self { deps, state, sink, _same_tab: same_tab, _cross_tab: cross_tab }
    }

    /// The last value published to the sink.
    #[must_use]
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Re-read the store now.
    pub fn refresh(&self) {
        publish(&self.state, &self.sink, self.deps.store.read());
    }

    #[must_use]
    pub fn deps(&self) -> &SessionDeps {
        &self.deps
    }

    /// Persist a fresh login and tell every other mirror about it.
    ///
    /// # Errors
    ///
    /// Returns the storage failure; nothing is announced in that case.
    pub fn login(&self, token: &str, user: Option<&User>) -> Result<(), SessionError> {
        self.deps.store.write(token, user)?;
        if let Err(e) = self.deps.store.clear_pending() {
            log::warn!("could not clear pending sign-up after login: {e}");
        }
        self.refresh();
        self.deps.channel.announce(AuthChanged::new(ChangeReason::Login));
        Ok(())
    }

    /// Overwrite the display profile after a successful profile edit.
    /// Returns `false` when nobody is logged in.
    ///
    /// # Errors
    ///
    /// Returns the storage failure; nothing is announced in that case.
    pub fn update_profile(&self, user: &User) -> Result<bool, SessionError> {
        if !self.deps.store.update_user(user)? {
            return Ok(false);
        }
        self.refresh();
        self.deps.channel.announce(AuthChanged::new(ChangeReason::ProfileUpdated));
        Ok(true)
    }

    /// Record a first-time OAuth user who still has to finish sign-up.
    ///
    /// # Errors
    ///
    /// Returns the storage failure; nothing is announced in that case.
    pub fn begin_signup(&self, pending: &PendingSignup) -> Result<(), SessionError> {
        self.deps.store.write_pending(pending)?;
        self.deps.channel.announce(AuthChanged::new(ChangeReason::PendingSignup));
        Ok(())
    }

    /// Clear the shared session, announce it and leave for [`LOGOUT_REDIRECT`].
    ///
    /// The announcement and the redirect happen even when the storage delete
    /// fails. The store stays authoritative: after a failed delete, mirrors
    /// re-read whatever it still holds.
    ///
    /// # Errors
    ///
    /// Returns the storage failure after completing the rest of the logout.
    pub fn logout(&self) -> Result<(), SessionError> {
        let cleared = self.deps.store.clear().and_then(|()| self.deps.store.clear_pending());
        if let Err(e) = &cleared {
            log::warn!("logout could not clear session storage: {e}");
        }
        publish(&self.state, &self.sink, Session::guest());
        self.deps.channel.announce(AuthChanged::new(ChangeReason::Logout));
        self.deps.navigator.navigate(LOGOUT_REDIRECT);
        cleared
    }

    /// Account deletion ends the session exactly like a logout.
    ///
    /// # Errors
    ///
    /// See [`SessionMirror::logout`].
    pub fn delete_account(&self) -> Result<(), SessionError> {
        self.logout()
    }
}

fn publish(state: &RefCell<Session>, sink: &Sink, next: Session) {
    let changed = *state.borrow() != next;
    if changed {
        state.replace(next.clone());
        sink(next);
    }
}
