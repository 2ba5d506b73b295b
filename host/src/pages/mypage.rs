//! My page: guarded layout with profile, edit and delete tabs.
//!
//! Profile edits and account deletion have no backend endpoint yet; both act
//! on the shared session only, so the navigation bar still follows them.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::{MYPAGE_PROFILE_PATH, redirect_for};
use crate::state::auth::{AuthState, SessionHandle, with_mirror};
use crate::state::forms::edit_profile_ready;

/// Layout shared by the my-page tabs. Guests are sent to the login page.
#[component]
pub fn MyPageLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let logged_in = auth.with(AuthState::is_logged_in);
        if let Some(to) = location.pathname.with(|path| redirect_for(path, logged_in)) {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || auth.with(AuthState::is_logged_in)>
            <div class="mypage">
                <nav class="mypage__tabs">
                    <A href=MYPAGE_PROFILE_PATH>"내프로필"</A>
                    <A href="/mypage/edit">"회원정보 수정"</A>
                    <A href="/mypage/delete">"회원탈퇴"</A>
                </nav>
                <Outlet/>
            </div>
        </Show>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let field = move |pick: fn(&session::User) -> Option<String>| {
        move || {
            auth.with(|a| a.session.user.as_ref().and_then(pick))
                .unwrap_or_else(|| "-".to_owned())
        }
    };

    view! {
        <section class="profile-card">
            <h2>"내 프로필"</h2>
            <p class="profile-card__name">{move || auth.with(AuthState::greeting_name)}</p>
            <dl class="profile-card__rows">
                <dt>"이메일"</dt>
                <dd>{field(|u| u.email.clone())}</dd>
                <dt>"이름"</dt>
                <dd>{field(|u| u.name.clone())}</dd>
                <dt>"닉네임"</dt>
                <dd>{field(|u| u.nickname.clone())}</dd>
            </dl>
        </section>
    }
}

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let mirror = expect_context::<SessionHandle>();
    let nickname = RwSignal::new(String::new());
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<String>);

    let ready = move || edit_profile_ready(&nickname.get(), &current_password.get(), &new_password.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !ready() {
            return;
        }
        let mut user = auth.with_untracked(|a| a.session.user.clone()).unwrap_or_default();
        let typed = nickname.get_untracked();
        if !typed.trim().is_empty() {
            user.nickname = Some(typed.trim().to_owned());
        }
        let message = match with_mirror(mirror, |m| m.update_profile(&user)) {
            Some(Ok(true)) => {
                nickname.set(String::new());
                current_password.set(String::new());
                new_password.set(String::new());
                "회원정보가 수정되었습니다."
            }
            Some(Ok(false)) => "로그인이 필요합니다.",
            Some(Err(e)) => {
                log::warn!("profile update failed: {e}");
                "수정에 실패했습니다. 잠시 후 다시 시도해주세요."
            }
            None => "수정에 실패했습니다. 잠시 후 다시 시도해주세요.",
        };
        notice.set(Some(message.to_owned()));
    };

    view! {
        <form class="profile-card edit-profile" on:submit=on_submit>
            <h2>"회원정보 수정"</h2>
            <label class="form-field">
                <span>"닉네임"</span>
                <input
                    type="text"
                    placeholder="닉네임"
                    aria-label="새 닉네임"
                    prop:value=move || nickname.get()
                    on:input=move |ev| nickname.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"현재 비밀번호"</span>
                <input
                    type="password"
                    placeholder="비밀번호를 입력하세요."
                    aria-label="현재 비밀번호"
                    prop:value=move || current_password.get()
                    on:input=move |ev| current_password.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"새 비밀번호"</span>
                <input
                    type="password"
                    placeholder="비밀번호를 다시 한 번 입력하세요."
                    aria-label="새 비밀번호"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
            </label>
            {move || notice.get().map(|text| view! { <p class="form-notice" role="status">{text}</p> })}
            <button type="submit" class="btn btn--primary" disabled=move || !ready()>
                "수정 완료"
            </button>
        </form>
    }
}

#[component]
pub fn DeleteAccountPage() -> impl IntoView {
    let mirror = expect_context::<SessionHandle>();
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password.get_untracked().is_empty() || !confirm_deletion() {
            return;
        }
        match with_mirror(mirror, session::SessionMirror::delete_account) {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                log::warn!("account deletion could not clear the session: {e}");
                notice.set(Some("탈퇴 요청에 실패했습니다. 비밀번호를 확인 후 다시 시도해주세요."));
            }
            None => notice.set(Some("탈퇴 요청에 실패했습니다. 비밀번호를 확인 후 다시 시도해주세요.")),
        }
    };

    view! {
        <form class="profile-card delete-account" on:submit=on_submit>
            <h2>"회원탈퇴"</h2>
            <p>"탈퇴 후에는 계정을 복구할 수 없습니다."</p>
            <input
                type="password"
                placeholder="현재 비밀번호를 입력하세요."
                aria-label="현재 비밀번호"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            {move || notice.get().map(|text| view! { <p class="form-error" role="alert">{text}</p> })}
            <button type="submit" class="btn btn--danger" disabled=move || password.with(String::is_empty)>
                "탈퇴하기"
            </button>
        </form>
    }
}

fn confirm_deletion() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("정말 탈퇴하시겠습니까? 이 작업은 되돌릴 수 없습니다.").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
