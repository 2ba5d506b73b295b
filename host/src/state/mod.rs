//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `forms`, `search`) so pages depend on
//! small focused models that are testable without a browser.

pub mod auth;
pub mod forms;
pub mod search;
