//! JS-facing mount API used by the host's federation loader.
//!
//! ```js
//! const handle = mount_nav_bar(el, { token, user }, () => logout());
//! handle.update({ token, user });
//! handle.unmount();
//! ```

use std::any::Any;
use std::rc::Rc;

use leptos::mount::mount_to;
use leptos::prelude::*;
use session::web::{LocationNavigator, browser_deps, current_path, js_reason};
use session::{NavBarProps, Session, SessionMirror};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::bar::{LogoutAction, NavBar};
use crate::state::NavState;

/// Live bar inside a host element.
#[wasm_bindgen]
pub struct NavBarHandle {
    state: ArcRwSignal<NavState>,
    // Only set when the bar was mounted without props.
    mirror: Option<Rc<SessionMirror>>,
    view: Option<Box<dyn Any>>,
}

#[wasm_bindgen]
impl NavBarHandle {
    /// Re-render with fresh props and the current `location.pathname`.
    pub fn update(&self, props: JsValue) {
        let path = current_path();
        match (decode_props(props), &self.mirror) {
            (Some(props), _) => self.state.set(NavState::from_props(&props, path)),
            (None, Some(mirror)) => self.state.set(NavState::new(mirror.current(), path)),
            (None, None) => self.state.update(|s| s.path = path),
        }
    }

    /// Tear the bar down. Further calls are no-ops.
    pub fn unmount(&mut self) {
        if self.view.take().is_some() {
            log::debug!("navbar unmounted");
        }
        self.mirror = None;
    }
}

/// Mount the bar into `target`.
///
/// With `props` the bar renders exactly what the host passes. Without them
/// it follows the shared session itself. `on_logout` replaces the built-in
/// logout, which clears the shared session and returns to `/`.
#[wasm_bindgen]
pub fn mount_nav_bar(target: web_sys::HtmlElement, props: JsValue, on_logout: Option<js_sys::Function>) -> NavBarHandle {
    let path = current_path();
    let state = ArcRwSignal::new(NavState::new(Session::guest(), path.clone()));

    let mirror = match decode_props(props) {
        Some(props) => {
            state.set(NavState::from_props(&props, path));
            None
        }
        None => standalone_mirror(&state),
    };

    let logout = logout_action(on_logout, mirror.clone());
    let view_state = state.clone();
    let handle = mount_to(target, move || {
        let on_logout: LogoutAction = StoredValue::new_local(logout);
        let state = RwSignal::from(view_state).read_only();
        view! { <NavBar state on_logout/> }
    });
    log::debug!("navbar mounted (standalone: {})", mirror.is_some());

    NavBarHandle { state, mirror, view: Some(Box::new(handle)) }
}

fn decode_props(props: JsValue) -> Option<NavBarProps> {
    if props.is_undefined() || props.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(props) {
        Ok(props) => Some(props),
        Err(e) => {
            log::warn!("ignoring unreadable navbar props: {e}");
            None
        }
    }
}

fn standalone_mirror(state: &ArcRwSignal<NavState>) -> Option<Rc<SessionMirror>> {
    let deps = match browser_deps(Rc::new(LocationNavigator)) {
        Ok(deps) => deps,
        Err(e) => {
            log::warn!("navbar cannot follow the session: {e}");
            return None;
        }
    };
    let sink = state.clone();
    let mirror = SessionMirror::mount(deps, move |session| {
        sink.set(NavState::new(session, current_path()));
    });
    Some(Rc::new(mirror))
}

fn logout_action(callback: Option<js_sys::Function>, mirror: Option<Rc<SessionMirror>>) -> Box<dyn Fn()> {
    if let Some(callback) = callback {
        return Box::new(move || {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log::warn!("host logout callback threw: {}", js_reason(&e));
            }
        });
    }
    Box::new(move || {
        let result = match &mirror {
            Some(mirror) => mirror.logout(),
            None => browser_deps(Rc::new(LocationNavigator))
                .and_then(|deps| SessionMirror::mount(deps, |_| {}).logout()),
        };
        if let Err(e) = result {
            log::warn!("logout did not clear storage: {e}");
        }
    })
}
