//! Shared session state for the Place Data micro-frontends.
//!
//! The host app and the navigation-bar remote are built and deployed
//! separately, so they never share Rust statics. Both agree instead on a small
//! origin-wide contract: two `localStorage` keys, one in-document event name,
//! and the browser's native `storage` event. This crate owns that contract.
//!
//! LAYERS
//! ======
//! - [`store`]: typed read/write/clear over a [`storage::KeyValueStorage`].
//! - [`notify`]: same-document change announcements.
//! - [`cross_tab`]: key-filtered storage mutations from other tabs.
//! - [`mirror`]: per-component reactive view that re-reads on either signal.
//! - [`remote`]: load state machine for the dynamically mounted remote.
//! - [`oauth`]: popup login message protocol.
//! - [`request`]: last-request-wins cancellation for search-style fetches.
//!
//! Everything except the `web` module is platform neutral and is exercised by
//! native unit tests against in-memory implementations.

pub mod cross_tab;
pub mod error;
pub mod mirror;
pub mod model;
pub mod notify;
pub mod oauth;
pub mod remote;
pub mod request;
pub mod storage;
pub mod store;
#[cfg(feature = "web")]
pub mod web;

pub use error::SessionError;
pub use mirror::{Navigator, SessionDeps, SessionMirror};
pub use model::{PendingSignup, Session, User};
pub use notify::{AuthChanged, ChangeChannel, ChangeReason, Subscription};
pub use remote::NavBarProps;
pub use store::SessionStore;

/// Storage key holding the bearer token. Its presence means "logged in".
pub const TOKEN_KEY: &str = "accessToken";
/// Storage key holding the JSON-encoded [`User`] snapshot.
pub const USER_KEY: &str = "user";
/// Storage key holding the temporary token of an OAuth sign-up in progress.
pub const PENDING_TOKEN_KEY: &str = "temporaryUserToken";
/// Name of the in-document `CustomEvent` fired after every session write.
pub const AUTH_CHANGED_EVENT: &str = "auth:changed";
/// Route every logout lands on.
pub const LOGOUT_REDIRECT: &str = "/";
