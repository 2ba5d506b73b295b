//! Runtime loading of the navigation-bar remote.
//!
//! The remote is a separate wasm-bindgen bundle served from its own origin.
//! Its JS entry is pulled in with a dynamic `import()`, initialised, and then
//! driven through three exports: `mount_nav_bar`, `NavBarHandle.update` and
//! `NavBarHandle.unmount`.

use js_sys::{Function, Promise, Reflect};
use session::NavBarProps;
use session::web::js_reason;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = "export function import_remote(url) { return import(url); }")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn import_remote(url: &str) -> Result<Promise, JsValue>;
}

fn export(obj: &JsValue, name: &str) -> Result<Function, String> {
    Reflect::get(obj, &JsValue::from_str(name))
        .map_err(|e| js_reason(&e))?
        .dyn_into::<Function>()
        .map_err(|_| format!("remote export `{name}` is not a function"))
}

/// An imported and initialised remote entry.
pub struct RemoteModule {
    mount: Function,
}

impl RemoteModule {
    /// Import `url` and run the bundle's wasm initialiser.
    ///
    /// # Errors
    ///
    /// Network, parse and initialisation failures, as text.
    pub async fn load(url: &str) -> Result<Self, String> {
        let promise = import_remote(url).map_err(|e| js_reason(&e))?;
        let module = JsFuture::from(promise).await.map_err(|e| js_reason(&e))?;

        let init = export(&module, "default")?;
        let ready = init.call0(&JsValue::UNDEFINED).map_err(|e| js_reason(&e))?;
        JsFuture::from(Promise::resolve(&ready)).await.map_err(|e| js_reason(&e))?;

        Ok(Self { mount: export(&module, "mount_nav_bar")? })
    }

    /// Mount the navigation bar into `target`.
    ///
    /// # Errors
    ///
    /// Prop encoding failures and exceptions thrown by the remote.
    pub fn mount(
        &self,
        target: &web_sys::Element,
        props: &NavBarProps,
        on_logout: &Function,
    ) -> Result<RemoteHandle, String> {
        let props = serde_wasm_bindgen::to_value(props).map_err(|e| e.to_string())?;
        let handle = self
            .mount
            .call3(&JsValue::UNDEFINED, target, &props, on_logout)
            .map_err(|e| js_reason(&e))?;
        Ok(RemoteHandle {
            update: export(&handle, "update")?,
            unmount: export(&handle, "unmount")?,
            handle,
        })
    }
}

/// A mounted navigation bar.
pub struct RemoteHandle {
    handle: JsValue,
    update: Function,
    unmount: Function,
}

impl RemoteHandle {
    /// Push fresh props into the mounted bar.
    pub fn update(&self, props: &NavBarProps) {
        let result = serde_wasm_bindgen::to_value(props)
            .map_err(|e| e.to_string())
            .and_then(|props| self.update.call1(&self.handle, &props).map_err(|e| js_reason(&e)));
        if let Err(e) = result {
            log::warn!("navigation bar update failed: {e}");
        }
    }

    pub fn unmount(&self) {
        if let Err(e) = self.unmount.call0(&self.handle) {
            log::warn!("navigation bar unmount failed: {}", js_reason(&e));
        }
    }
}
