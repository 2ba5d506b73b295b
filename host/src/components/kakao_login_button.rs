//! Kakao login through a popup window.
//!
//! The popup runs the provider flow on the backend origin and finishes on a
//! page that posts the result to `window.opener`. The listener lives as long
//! as this button; messages from any other origin are dropped unseen.

use leptos::prelude::*;

const POPUP_BLOCKED: &str = "팝업이 차단되었습니다. 팝업 차단을 해제한 뒤 다시 시도해 주세요.";
const LOGIN_FAILED: &str = "카카오 로그인 처리 중 오류가 발생했습니다.";

/// Button that opens the Kakao login popup.
#[component]
pub fn KakaoLoginButton() -> impl IntoView {
    let notice = RwSignal::new(None::<&'static str>);

    #[cfg(feature = "csr")]
    let login = popup::install(notice);

    let on_click = move |_| {
        notice.set(None);
        #[cfg(feature = "csr")]
        {
            let opened = login.with_value(|login| login.as_ref().map(popup::PopupLogin::open));
            match opened {
                Some(Err(message)) => notice.set(Some(message)),
                None => notice.set(Some(LOGIN_FAILED)),
                Some(Ok(())) => {}
            }
        }
    };

    view! {
        <div class="kakao-login">
            <button type="button" class="kakao-login__button" on:click=on_click>
                <span class="kakao-login__icon" aria-hidden="true"></span>
                "카카오로 시작하기"
            </button>
            {move || notice.get().map(|text| view! { <p class="form-error" role="alert">{text}</p> })}
        </div>
    }
}

#[cfg(feature = "csr")]
mod popup {
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos::prelude::*;
    use leptos_router::NavigateOptions;
    use leptos_router::hooks::use_navigate;
    use session::Subscription;
    use session::oauth::{OAuthBridge, POPUP_NAME, PopupGeometry, PopupOutcome};
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{MessageEvent, Window};

    use super::{LOGIN_FAILED, POPUP_BLOCKED};
    use crate::routing::{HOME_PATH, SIGNUP_PATH};
    use crate::state::auth::{SessionHandle, with_mirror};

    pub(super) struct PopupLogin {
        window: Window,
        popup: Rc<RefCell<Option<Window>>>,
        _listener: Subscription,
    }

    fn metric(value: Result<JsValue, JsValue>) -> f64 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    }

    impl PopupLogin {
        pub(super) fn open(&self) -> Result<(), &'static str> {
            let geometry = PopupGeometry::centered(
                metric(self.window.outer_width()),
                metric(self.window.outer_height()),
                metric(self.window.screen_x()),
                metric(self.window.screen_y()),
            );
            let url = crate::config::kakao_start_url();
            match self
                .window
                .open_with_url_and_target_and_features(url, POPUP_NAME, &geometry.features())
            {
                Ok(Some(popup)) => {
                    self.popup.replace(Some(popup));
                    Ok(())
                }
                Ok(None) | Err(_) => Err(POPUP_BLOCKED),
            }
        }
    }

    /// Start listening for popup messages for the lifetime of the button.
    pub(super) fn install(notice: RwSignal<Option<&'static str>>) -> StoredValue<Option<PopupLogin>, LocalStorage> {
        let handle = expect_context::<SessionHandle>();
        let navigate = use_navigate();

        let login = web_sys::window().zip(with_mirror(handle, |m| m.deps().clone())).map(|(window, deps)| {
            let bridge = OAuthBridge::new(crate::config::api_origin(), deps.store, deps.channel);
            let popup: Rc<RefCell<Option<Window>>> = Rc::new(RefCell::new(None));

            let listener = {
                let popup = Rc::clone(&popup);
                session::web::listen(&window, "message", move |event| {
                    let Some(event) = event.dyn_ref::<MessageEvent>() else {
                        return;
                    };
                    let data = serde_wasm_bindgen::from_value::<serde_json::Value>(event.data())
                        .unwrap_or(serde_json::Value::Null);
                    let outcome = bridge.handle(&event.origin(), &data);

                    if outcome.closes_popup() {
                        if let Some(popup) = popup.borrow_mut().take() {
                            if !popup.closed().unwrap_or(true) {
                                let _ = popup.close();
                            }
                        }
                    }

                    let replace = NavigateOptions { replace: true, ..NavigateOptions::default() };
                    match outcome {
                        PopupOutcome::Ignored => {}
                        PopupOutcome::LoggedIn(_) => navigate(HOME_PATH, replace),
                        PopupOutcome::SignupRequired(_) => navigate(SIGNUP_PATH, replace),
                        PopupOutcome::Rejected(_) => notice.set(Some(LOGIN_FAILED)),
                    }
                })
            };

            PopupLogin { window, popup, _listener: listener }
        });

        if login.is_none() {
            log::warn!("popup login unavailable: no window or session");
        }
        StoredValue::new_local(login)
    }
}
