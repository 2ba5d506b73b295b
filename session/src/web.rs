//! Browser implementations of the session seams.
//!
//! Compiled only with the `web` feature; everything here is a thin adapter
//! over `web-sys` so the logic above it stays testable natively.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CustomEvent, CustomEventInit, Event, EventTarget, StorageEvent, Window};

use crate::AUTH_CHANGED_EVENT;
use crate::cross_tab::{KeyListener, StorageEvents};
use crate::error::SessionError;
use crate::mirror::{Navigator, SessionDeps};
use crate::notify::{AuthChanged, ChangeChannel, Listener, Subscription};
use crate::storage::{KeyValueStorage, MemoryStorage};
use crate::store::SessionStore;

fn window() -> Result<Window, SessionError> {
    web_sys::window().ok_or(SessionError::Unavailable)
}

/// Best-effort text of a thrown JS value.
#[must_use]
pub fn js_reason(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    err.dyn_ref::<js_sys::Error>()
        .map_or_else(|| format!("{err:?}"), |e| String::from(e.message()))
}

/// Attach `handler` to `event` on `target` until the subscription drops.
pub fn listen(target: &EventTarget, event: &'static str, handler: impl Fn(Event) + 'static) -> Subscription {
    let closure = Closure::<dyn Fn(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("could not listen for `{event}`: {}", js_reason(&e));
        return Subscription::noop();
    }
    let target = target.clone();
    Subscription::new(move || {
        let _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    })
}

// =============================================================================
// STORAGE
// =============================================================================

/// `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    /// # Errors
    ///
    /// [`SessionError::Unavailable`] when there is no window or storage is
    /// disabled for this origin.
    pub fn open() -> Result<Self, SessionError> {
        let inner = window()?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(SessionError::Unavailable)?;
        Ok(Self { inner })
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.inner.set_item(key, value).map_err(|e| SessionError::Storage {
            key: key.to_owned(),
            reason: js_reason(&e),
        })
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.inner.remove_item(key).map_err(|e| SessionError::Storage {
            key: key.to_owned(),
            reason: js_reason(&e),
        })
    }
}

// =============================================================================
// EVENTS
// =============================================================================

/// `auth:changed` `CustomEvent` dispatched on `window`.
#[derive(Clone, Debug)]
pub struct DomChannel {
    window: Window,
}

impl DomChannel {
    /// # Errors
    ///
    /// [`SessionError::Unavailable`] outside a browser window.
    pub fn open() -> Result<Self, SessionError> {
        Ok(Self { window: window()? })
    }
}

impl ChangeChannel for DomChannel {
    fn announce(&self, event: AuthChanged) {
        let init = CustomEventInit::new();
        match serde_wasm_bindgen::to_value(&event) {
            Ok(detail) => init.set_detail(&detail),
            Err(e) => log::warn!("could not encode `{AUTH_CHANGED_EVENT}` detail: {e}"),
        }
        let dispatched = CustomEvent::new_with_event_init_dict(AUTH_CHANGED_EVENT, &init)
            .and_then(|custom| self.window.dispatch_event(&custom));
        match dispatched {
            Ok(_) => log::debug!("dispatched `{AUTH_CHANGED_EVENT}` ({:?})", event.reason),
            Err(e) => log::warn!("could not dispatch `{AUTH_CHANGED_EVENT}`: {}", js_reason(&e)),
        }
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        listen(&self.window, AUTH_CHANGED_EVENT, move |_| listener())
    }
}

/// Native `storage` events from other tabs.
#[derive(Clone, Debug)]
pub struct DomStorageEvents {
    window: Window,
}

impl DomStorageEvents {
    /// # Errors
    ///
    /// [`SessionError::Unavailable`] outside a browser window.
    pub fn open() -> Result<Self, SessionError> {
        Ok(Self { window: window()? })
    }
}

impl StorageEvents for DomStorageEvents {
    fn subscribe_raw(&self, listener: KeyListener) -> Subscription {
        listen(&self.window, "storage", move |event| {
            if let Some(event) = event.dyn_ref::<StorageEvent>() {
                listener(event.key().as_deref());
            }
        })
    }
}

/// Full-page navigation through `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        let result = window().map(|w| w.location().set_href(path));
        if let Ok(Err(e)) = result {
            log::warn!("could not navigate to {path}: {}", js_reason(&e));
        }
    }
}

/// Current `window.location.pathname`, or `/` outside a browser.
#[must_use]
pub fn current_path() -> String {
    window()
        .ok()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_owned())
}

/// Wire the browser implementations together.
///
/// A page without `localStorage` still works for the current document: the
/// store falls back to memory and a warning is logged.
///
/// # Errors
///
/// [`SessionError::Unavailable`] outside a browser window.
pub fn browser_deps(navigator: Rc<dyn Navigator>) -> Result<SessionDeps, SessionError> {
    let store = match LocalStorage::open() {
        Ok(storage) => SessionStore::new(storage),
        Err(e) => {
            log::warn!("{e}; keeping the session in memory for this page");
            SessionStore::new(MemoryStorage::new())
        }
    };
    Ok(SessionDeps {
        store,
        channel: Rc::new(DomChannel::open()?),
        storage_events: Rc::new(DomStorageEvents::open()?),
        navigator,
    })
}
