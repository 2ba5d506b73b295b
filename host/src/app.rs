//! Root application component with routing and the session scope.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::remote_nav::RemoteNavBar;
use crate::pages::{
    domestic::DomesticPage,
    home::HomePage,
    login::LoginPage,
    mypage::{DeleteAccountPage, EditProfilePage, MyPageLayout, ProfilePage},
    signup::SignupPage,
    support::SupportPage,
};
use crate::routing::{HOME_PATH, MYPAGE_PROFILE_PATH, shows_nav_bar};
use crate::state::auth::{AuthState, SessionHandle};

/// Root application component.
///
/// Provides the auth signal and sets up client-side routing. Unknown paths
/// go home.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Title text="Place Data"/>

        <Router>
            <SessionScope>
                <NavSlot/>
                <main class="page">
                    <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("signup") view=SignupPage/>
                        <Route path=StaticSegment("support") view=SupportPage/>
                        <Route path=StaticSegment("domestic") view=DomesticPage/>
                        <ParentRoute path=StaticSegment("mypage") view=MyPageLayout>
                            <Route path=StaticSegment("") view=|| view! { <Redirect path=MYPAGE_PROFILE_PATH/> }/>
                            <Route path=StaticSegment("profile") view=ProfilePage/>
                            <Route path=StaticSegment("edit") view=EditProfilePage/>
                            <Route path=StaticSegment("delete") view=DeleteAccountPage/>
                        </ParentRoute>
                    </Routes>
                </main>
            </SessionScope>
        </Router>
    }
}

/// Mounts the host's session mirror before any child renders, so the first
/// frame already reflects a stored session.
#[component]
fn SessionScope(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let handle: SessionHandle = StoredValue::new_local(None);
    provide_context(handle);

    #[cfg(feature = "csr")]
    {
        use std::rc::Rc;

        let navigator = RouterNavigator(leptos_router::hooks::use_navigate());
        match session::web::browser_deps(Rc::new(navigator)) {
            Ok(deps) => {
                let mirror = session::SessionMirror::mount(deps, move |s| auth.set(AuthState::from(s)));
                handle.set_value(Some(mirror));
            }
            Err(e) => log::warn!("session sync disabled: {e}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    let _ = auth;

    children()
}

/// Leptos router behind the session crate's [`session::Navigator`].
#[cfg(feature = "csr")]
struct RouterNavigator<F>(F);

#[cfg(feature = "csr")]
impl<F: Fn(&str, leptos_router::NavigateOptions)> session::Navigator for RouterNavigator<F> {
    fn navigate(&self, path: &str) {
        (self.0)(path, leptos_router::NavigateOptions::default());
    }
}

/// The remote navigation bar, except on routes that hide it.
#[component]
fn NavSlot() -> impl IntoView {
    let location = use_location();
    view! {
        <Show when=move || location.pathname.with(|path| shows_nav_bar(path))>
            <RemoteNavBar/>
        </Show>
    }
}
