//! Login page: password form and Kakao popup login.

use leptos::prelude::*;

use crate::components::kakao_login_button::KakaoLoginButton;
use crate::state::forms::{LoginFieldError, validate_login};

#[cfg(feature = "csr")]
const LOGIN_REJECTED: &str = "아이디 또는 비밀번호를 확인해 주세요.";

/// Login page. A successful login writes the shared session and goes home;
/// the navigation bar picks the change up from the session event.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<LoginFieldError>);
    let common_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "csr")]
    let mirror = expect_context::<crate::state::auth::SessionHandle>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        field_error.set(None);
        common_error.set(None);
        if submitting.get_untracked() {
            return;
        }
        if let Err(field) = validate_login(&email.get_untracked(), &password.get_untracked()) {
            field_error.set(Some(field));
            return;
        }

        #[cfg(feature = "csr")]
        {
            use crate::net::account::{self, LoginRequest};

            let navigate = navigate.clone();
            let req = LoginRequest { email: email.get_untracked().trim().to_owned(), password: password.get_untracked() };
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = match account::login(&req).await {
                    Ok(token) => {
                        let user = account::my_profile(&token).await.ok().map(|p| p.to_user());
                        crate::state::auth::with_mirror(mirror, |m| m.login(&token, user.as_ref()))
                            .unwrap_or(Err(session::SessionError::Unavailable))
                            .map_err(|e| e.to_string())
                    }
                    Err(e) => {
                        log::warn!("password login failed: {e}");
                        Err(LOGIN_REJECTED.to_owned())
                    }
                };
                submitting.set(false);
                match result {
                    Ok(()) => navigate(
                        crate::routing::HOME_PATH,
                        leptos_router::NavigateOptions { replace: true, ..Default::default() },
                    ),
                    Err(message) => common_error.set(Some(message)),
                }
            });
        }
    };

    let error_for = move |field: LoginFieldError| {
        move || {
            (field_error.get() == Some(field)).then(|| view! { <p class="form-error">{field.message()}</p> })
        }
    };

    view! {
        <div class="login-page">
            <header class="login-page__header">
                <a href="/" class="login-page__brand">"Place Data"</a>
            </header>
            <form class="login-form" on:submit=on_submit>
                <div class="form-field">
                    <input
                        type="email"
                        placeholder="이메일을 입력해 주세요."
                        aria-label="이메일"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {error_for(LoginFieldError::Email)}
                </div>
                <div class="form-field">
                    <input
                        type="password"
                        placeholder="비밀번호를 입력해 주세요."
                        aria-label="비밀번호"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    {error_for(LoginFieldError::Password)}
                </div>
                {move || common_error.get().map(|text| view! { <p class="form-error" role="alert">{text}</p> })}
                <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "로그인 중..." } else { "로그인" }}
                </button>
            </form>
            <div class="login-page__social">
                <KakaoLoginButton/>
            </div>
            <p class="login-page__footer">
                <a href="/signup">"회원가입"</a>
            </p>
        </div>
    }
}
