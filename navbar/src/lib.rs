//! # navbar
//!
//! The Place Data navigation bar, built and served as its own wasm bundle.
//!
//! The host imports this bundle at runtime and drives it through
//! [`mount::mount_nav_bar`]. Opened on its own (no props), the bar keeps a
//! private session mirror instead, so it still follows logins made by any
//! other bundle on the origin.

pub mod bar;
#[cfg(feature = "csr")]
pub mod mount;
pub mod state;
pub mod tabs;

/// WASM entry point: runs once when the host initialises the bundle.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
