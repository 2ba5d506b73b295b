//! Sign-up page.
//!
//! Also the landing page of a first-time Kakao user: when a pending sign-up
//! is stored, its profile pre-fills the form.

use leptos::prelude::*;

use crate::state::forms::{SignupErrors, validate_signup};

/// Sign-up form. Registers, logs straight in and goes home.
#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(SignupErrors::default());
    let common_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let mirror = expect_context::<crate::state::auth::SessionHandle>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    #[cfg(feature = "csr")]
    {
        let pending = crate::state::auth::with_mirror(mirror, |m| m.deps().store.read_pending()).flatten();
        if let Some(user) = pending.and_then(|p| p.user) {
            email.set(user.email.unwrap_or_default());
            nickname.set(user.nickname.or(user.name).unwrap_or_default());
        }
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        common_error.set(None);
        if submitting.get_untracked() {
            return;
        }
        let next = validate_signup(
            &email.get_untracked(),
            &nickname.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );
        let valid = next.is_empty();
        errors.set(next);
        if !valid {
            return;
        }

        #[cfg(feature = "csr")]
        {
            use crate::net::account::{RegisterRequest, register_and_login};
            use crate::state::forms::signup_failure_message;

            let navigate = navigate.clone();
            let req = RegisterRequest {
                email: email.get_untracked().trim().to_owned(),
                password: password.get_untracked(),
                nick_name: nickname.get_untracked().trim().to_owned(),
            };
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = match register_and_login(req).await {
                    Ok((token, user)) => crate::state::auth::with_mirror(mirror, |m| m.login(&token, user.as_ref()))
                        .unwrap_or(Err(session::SessionError::Unavailable))
                        .map_err(|e| e.to_string()),
                    Err(e) => Err(signup_failure_message(&e.user_message())),
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

    view! {
        <div class="login-page signup-page">
            <header class="login-page__header">
                <h1>"Place Data"</h1>
            </header>
            <form class="login-form" on:submit=on_submit>
                <SignupField
                    kind="email"
                    placeholder="이메일을 입력해 주세요."
                    label="이메일"
                    value=email
                    error=Signal::derive(move || errors.get().email)
                />
                <SignupField
                    kind="text"
                    placeholder="닉네임을 입력해 주세요."
                    label="닉네임"
                    value=nickname
                    error=Signal::derive(move || errors.get().nickname)
                />
                <SignupField
                    kind="password"
                    placeholder="비밀번호 (6자 이상)"
                    label="비밀번호"
                    value=password
                    error=Signal::derive(move || errors.get().password)
                />
                <SignupField
                    kind="password"
                    placeholder="비밀번호 확인"
                    label="비밀번호 확인"
                    value=confirm
                    error=Signal::derive(move || errors.get().confirm)
                />
                {move || common_error.get().map(|text| view! { <p class="form-error" role="alert">{text}</p> })}
                <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "가입 중..." } else { "회원가입" }}
                </button>
                <p class="login-page__footer">
                    <a href="/login">"이미 계정이 있으신가요? 로그인"</a>
                </p>
            </form>
        </div>
    }
}

#[component]
fn SignupField(
    kind: &'static str,
    placeholder: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <input
                type=kind
                placeholder=placeholder
                aria-label=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|text| view! { <p class="form-error">{text}</p> })}
        </div>
    }
}
