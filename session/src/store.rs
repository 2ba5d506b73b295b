//! Typed access to the persistent session keys.
//!
//! ORDERING
//! ========
//! `write` stores the user blob before the token and `clear` removes the token
//! before the user blob. A reader interleaved with either sequence therefore
//! never sees a token paired with the wrong profile; at worst it sees a stray
//! profile without a token, which [`Session::new`] reads as logged-out.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::rc::Rc;

use crate::error::SessionError;
use crate::model::{PendingSignup, Session, User};
use crate::storage::KeyValueStorage;
use crate::{PENDING_TOKEN_KEY, TOKEN_KEY, USER_KEY};

/// Handle to the origin-wide session keys. Cheap to clone.
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self { storage: Rc::new(storage) }
    }

    /// Persist a logged-in session. `None` removes any stale profile blob.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure; keys written before it stay written.
    pub fn write(&self, token: &str, user: Option<&User>) -> Result<(), SessionError> {
        self.put_user(user)?;
        self.storage.set(TOKEN_KEY, token)
    }

    /// Read the current session, failing soft on a corrupt profile blob.
    #[must_use]
    pub fn read(&self) -> Session {
        let token = self.storage.get(TOKEN_KEY);
        let user = self.read_user();
        Session::new(token, user)
    }

    /// Remove the token and profile.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)
    }

    /// Overwrite the profile of the logged-in user after a profile edit.
    /// Returns `false` without writing when nobody is logged in.
    ///
    /// # Errors
    ///
    /// Returns the storage failure of the profile write.
    pub fn update_user(&self, user: &User) -> Result<bool, SessionError> {
        if !self.read().is_logged_in() {
            return Ok(false);
        }
        self.put_user(Some(user))?;
        Ok(true)
    }

    /// Persist the transitional state of a first-time OAuth user.
    ///
    /// The pending profile shares the `user` key, so any live token is
    /// removed first: the previous account is logged out rather than paired
    /// with the newcomer's profile.
    ///
    /// # Errors
    ///
    /// Returns the first storage failure.
    pub fn write_pending(&self, pending: &PendingSignup) -> Result<(), SessionError> {
        self.storage.remove(TOKEN_KEY)?;
        self.put_user(pending.user.as_ref())?;
        self.storage.set(PENDING_TOKEN_KEY, &pending.temporary_token)
    }

    #[must_use]
    pub fn read_pending(&self) -> Option<PendingSignup> {
        let temporary_token = self.storage.get(PENDING_TOKEN_KEY).filter(|t| !t.is_empty())?;
        Some(PendingSignup { temporary_token, user: self.read_user() })
    }

    /// # Errors
    ///
    /// Returns the storage failure of the delete.
    pub fn clear_pending(&self) -> Result<(), SessionError> {
        self.storage.remove(PENDING_TOKEN_KEY)
    }

    fn put_user(&self, user: Option<&User>) -> Result<(), SessionError> {
        match user {
            Some(user) => {
                let raw = serde_json::to_string(user).map_err(|e| SessionError::Encode(e.to_string()))?;
                self.storage.set(USER_KEY, &raw)
            }
            None => self.storage.remove(USER_KEY),
        }
    }

    fn read_user(&self) -> Option<User> {
        let raw = self.storage.get(USER_KEY)?;
        parse_user(&raw)
    }
}

/// Decode the stored profile blob. The blob is free-form text any script on
/// the origin can write, so every failure maps to "no profile".
fn parse_user(raw: &str) -> Option<User> {
    match serde_json::from_str::<Option<User>>(raw) {
        Ok(user) => user,
        Err(e) => {
            log::warn!("ignoring unreadable `{USER_KEY}` entry: {e}");
            None
        }
    }
}
