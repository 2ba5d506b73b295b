//! # host
//!
//! Leptos + WASM container app for Place Data. Owns routing, the page views,
//! the popup login flow and the boundary that mounts the separately built
//! navigation-bar remote.
//!
//! Session state is never passed between the two bundles directly; both read
//! the shared store through the `session` crate and react to its change
//! events.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
