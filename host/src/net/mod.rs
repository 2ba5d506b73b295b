//! Network access: backend REST clients and the remote-module loader.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning [`ApiError::Unavailable`].

pub mod account;
pub mod error;
#[cfg(feature = "csr")]
pub mod federation;
pub mod places;

pub use error::ApiError;
