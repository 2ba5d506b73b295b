//! Load state of a dynamically mounted remote component.
//!
//! A mount instance starts in `Loading` and settles exactly once, in either
//! `Loaded` or `Failed`. There is no retry; a fresh mount starts over.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::fmt::Display;
use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use serde::{Deserialize, Serialize};

use crate::model::{Session, User};

/// Props the host hands to the mounted navigation bar.
///
/// The logout callback travels next to this value as a plain JS function.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavBarProps {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl NavBarProps {
    /// Normalised session view of the props.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(self.token.clone(), self.user.clone())
    }
}

impl From<&Session> for NavBarProps {
    fn from(session: &Session) -> Self {
        Self { token: session.token.clone(), user: session.user.clone() }
    }
}

/// Why a remote failed to load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadFailure {
    #[error("remote did not load within {0} ms")]
    Timeout(u32),
    #[error("remote failed to load: {0}")]
    Load(String),
}

/// Rejected state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("remote mount already settled as {0}")]
    AlreadySettled(&'static str),
}

/// Tagged load state of one mount instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MountState {
    #[default]
    Loading,
    Loaded,
    Failed(LoadFailure),
}

impl MountState {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed(_) => "failed",
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Whether the deterministic placeholder should be on screen.
    #[must_use]
    pub fn shows_placeholder(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn renders_remote(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    /// `Loading -> Loaded`.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::AlreadySettled`] from a terminal state.
    pub fn resolve_loaded(&mut self) -> Result<(), MountError> {
        self.settle(Ok(()))
    }

    /// `Loading -> Failed`.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::AlreadySettled`] from a terminal state.
    pub fn resolve_failed(&mut self, failure: LoadFailure) -> Result<(), MountError> {
        self.settle(Err(failure))
    }

    /// Apply a load outcome.
    ///
    /// # Errors
    ///
    /// Returns [`MountError::AlreadySettled`] from a terminal state; the
    /// state is left untouched.
    pub fn settle(&mut self, outcome: Result<(), LoadFailure>) -> Result<(), MountError> {
        if self.is_settled() {
            return Err(MountError::AlreadySettled(self.label()));
        }
        *self = match outcome {
            Ok(()) => Self::Loaded,
            Err(failure) => Self::Failed(failure),
        };
        Ok(())
    }
}

/// Race `load` against an injected `timeout` future.
///
/// The caller supplies the timer (`gloo-timers` in the browser, anything in
/// tests); `timeout_ms` only labels the failure.
///
/// # Errors
///
/// [`LoadFailure::Load`] when `load` resolves to an error,
/// [`LoadFailure::Timeout`] when `timeout` completes first.
pub async fn load_remote<T, E, L, D>(load: L, timeout: D, timeout_ms: u32) -> Result<T, LoadFailure>
where
    E: Display,
    L: Future<Output = Result<T, E>>,
    D: Future<Output = ()>,
{
    let load = pin!(load);
    let timeout = pin!(timeout);
    match select(load, timeout).await {
        Either::Left((Ok(value), _)) => Ok(value),
        Either::Left((Err(e), _)) => Err(LoadFailure::Load(e.to_string())),
        Either::Right(((), _)) => Err(LoadFailure::Timeout(timeout_ms)),
    }
}
