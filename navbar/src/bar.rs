//! The bar itself: logo, search box, account links and a tab row.
//!
//! Links are plain anchors. When the bar is mounted inside the host, the
//! host router intercepts same-origin anchor clicks, so navigation stays
//! client-side without this bundle knowing about the router.

use leptos::prelude::*;

use crate::state::NavState;
use crate::tabs::Tab;

const SEARCH_PLACEHOLDER: &str = "지친 나를 위한 힐링 여행";

/// Logout action supplied by whoever mounted the bar.
pub type LogoutAction = StoredValue<Box<dyn Fn()>, LocalStorage>;

#[component]
pub fn NavBar(state: ReadSignal<NavState>, on_logout: LogoutAction) -> impl IntoView {
    let logged_in = move || state.with(NavState::is_logged_in);

    view! {
        <header class="pd-header">
            <div class="pd-header-inner">
                <a class="pd-logo" href="/">"Place Data"</a>
                <SearchBox/>
                <nav class="pd-account">
                    <Show
                        when=logged_in
                        fallback=|| view! {
                            <a href="/signup">"회원가입"</a>
                            <span class="pd-sep">"|"</span>
                            <a href="/login">"로그인"</a>
                            <span class="pd-sep">"|"</span>
                            <a href="/support">"고객센터"</a>
                        }
                    >
                        {move || state.with(NavState::greeting).map(|hello| view! {
                            <span class="pd-hello">{hello}</span>
                        })}
                        <a href="/mypage">"마이페이지"</a>
                        <span class="pd-sep">"|"</span>
                        <button
                            type="button"
                            class="pd-logout"
                            on:click=move |_| on_logout.with_value(|logout| logout())
                        >
                            "로그아웃"
                        </button>
                        <span class="pd-sep">"|"</span>
                        <a href="/support">"고객센터"</a>
                    </Show>
                </nav>
            </div>
            <TabRow state/>
        </header>
    }
}

#[component]
fn SearchBox() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let placeholder = RwSignal::new(SEARCH_PLACEHOLDER);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get_untracked();
        let q = q.trim();
        if !q.is_empty() {
            log::info!("search requested: {q}");
        }
    };

    view! {
        <form class="pd-search" on:submit=on_submit>
            <input
                type="text"
                aria-label="검색"
                prop:value=move || query.get()
                placeholder=move || placeholder.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                on:focus=move |_| placeholder.set("")
                on:blur=move |_| placeholder.set(SEARCH_PLACEHOLDER)
            />
            <button type="submit" aria-label="검색하기">"검색"</button>
        </form>
    }
}

#[component]
fn TabRow(state: ReadSignal<NavState>) -> impl IntoView {
    let tab_link = move |tab: &'static Tab| {
        let active = move || state.with(|s| tab.is_active(&s.path));
        view! {
            <li>
                <a
                    href=tab.href
                    class:is-active=active
                    aria-current=move || active().then_some("page")
                >
                    {tab.label}
                </a>
            </li>
        }
    };

    view! {
        <nav class="pd-tabs">
            <ul>
                {move || state.with(NavState::tabs).iter().map(tab_link).collect_view()}
            </ul>
        </nav>
    }
}
