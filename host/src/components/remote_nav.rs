//! Mount boundary for the navigation-bar remote.
//!
//! The remote bundle is fetched at runtime from its own origin. While it
//! loads, a fixed placeholder holds the bar's space. Once the load settles
//! the boundary either hands the remote a target element and keeps its props
//! current, or logs the failure and renders nothing; the rest of the page is
//! never blocked. Each mount of this component loads at most once.

#[cfg(test)]
#[path = "remote_nav_test.rs"]
mod remote_nav_test;

use leptos::html::Div;
use leptos::prelude::*;
use leptos::web_sys::HtmlDivElement;
use session::remote::{LoadFailure, MountState};

#[cfg(feature = "csr")]
use crate::net::federation::{RemoteHandle, RemoteModule};
#[cfg(feature = "csr")]
use crate::state::auth::{AuthState, SessionHandle};

/// Hosts the remote navigation bar.
#[component]
pub fn RemoteNavBar() -> impl IntoView {
    let state = RwSignal::new(MountState::default());
    let target = NodeRef::<Div>::new();

    #[cfg(feature = "csr")]
    mount_remote(state, target);

    view! {
        <div class="remote-nav" data-state=move || state.with(MountState::label)>
            <Show when=move || state.with(MountState::shows_placeholder)>
                <div class="remote-nav__placeholder" aria-busy="true">
                    <span class="remote-nav__spinner"></span>
                </div>
            </Show>
            <div
                class="remote-nav__mount"
                class:remote-nav__mount--hidden=move || !state.with(MountState::renders_remote)
                node_ref=target
            ></div>
        </div>
    }
}

/// Pair a finished load with the element it should mount into.
///
/// The load runs in a detached task, so the boundary may have been disposed
/// by the time it resolves. A disposed or never-rendered target turns the
/// load into a failure instead of touching the dead node ref.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn claim_target<T>(
    loaded: Result<T, LoadFailure>,
    target: NodeRef<Div>,
) -> Result<(T, HtmlDivElement), LoadFailure> {
    let value = loaded?;
    let element = target
        .try_get_untracked()
        .flatten()
        .ok_or_else(|| LoadFailure::Load("navigation bar target is gone".to_owned()))?;
    Ok((value, element))
}

/// A mounted remote plus the logout callback it holds a reference to.
/// Dropping it unmounts the remote.
#[cfg(feature = "csr")]
struct MountedNav {
    handle: RemoteHandle,
    _on_logout: wasm_bindgen::closure::Closure<dyn Fn()>,
}

#[cfg(feature = "csr")]
impl Drop for MountedNav {
    fn drop(&mut self) {
        self.handle.unmount();
    }
}

#[cfg(feature = "csr")]
fn mount_remote(state: RwSignal<MountState>, target: NodeRef<Div>) {
    use session::remote::load_remote;

    let auth = expect_context::<RwSignal<AuthState>>();
    let mirror = expect_context::<SessionHandle>();
    let location = leptos_router::hooks::use_location();
    let mounted: StoredValue<Option<MountedNav>, LocalStorage> = StoredValue::new_local(None);

    leptos::task::spawn_local(async move {
        let entry = crate::config::remote_entry();
        let timeout_ms = crate::config::remote_timeout_ms();
        let timeout = gloo_timers::future::TimeoutFuture::new(timeout_ms);

        let loaded = load_remote(RemoteModule::load(entry), timeout, timeout_ms).await;
        let outcome = claim_target(loaded, target)
            .and_then(|(module, element)| attach(&module, &element, auth, mirror).map_err(LoadFailure::Load));

        let settled = match outcome {
            Ok(nav) => {
                log::info!("navigation bar mounted from {entry}");
                // A boundary torn down mid-load hands the value back; dropping
                // it unmounts right away.
                drop(mounted.try_set_value(Some(nav)));
                Ok(())
            }
            Err(failure) => {
                log::error!("navigation bar unavailable: {failure}");
                Err(failure)
            }
        };
        if let Some(Err(e)) = state.try_update(|s| s.settle(settled)) {
            log::warn!("{e}");
        }
    });

    // The remote reads the current path itself on every update.
    Effect::new(move || {
        let props = auth.with(AuthState::nav_props);
        location.pathname.track();
        state.track();
        mounted.with_value(|nav| {
            if let Some(nav) = nav {
                nav.handle.update(&props);
            }
        });
    });
}

#[cfg(feature = "csr")]
fn attach(
    module: &RemoteModule,
    element: &HtmlDivElement,
    auth: RwSignal<AuthState>,
    mirror: SessionHandle,
) -> Result<MountedNav, String> {
    use wasm_bindgen::JsCast;

    let on_logout = wasm_bindgen::closure::Closure::<dyn Fn()>::new(move || {
        if let Some(Err(e)) = crate::state::auth::with_mirror(mirror, session::SessionMirror::logout) {
            log::warn!("logout from navigation bar: {e}");
        }
    });
    let props = auth.try_get_untracked().ok_or("session scope is gone")?.nav_props();
    let handle = module.mount(element, &props, on_logout.as_ref().unchecked_ref())?;
    Ok(MountedNav { handle, _on_logout: on_logout })
}
