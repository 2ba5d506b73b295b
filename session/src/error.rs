//! Error type shared by the session store and its storage backends.

/// Failure while mutating the persistent session store.
///
/// Reads never produce this error: a missing or unreadable value is reported
/// as absent instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No storage backend is reachable (storage disabled, no window).
    #[error("session storage is unavailable")]
    Unavailable,
    /// The backend refused a write or delete (quota, privacy mode, ...).
    #[error("session storage rejected `{key}`: {reason}")]
    Storage { key: String, reason: String },
    /// The user profile could not be serialised.
    #[error("failed to encode user profile: {0}")]
    Encode(String),
}
