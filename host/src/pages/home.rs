//! Landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Landing page with the search hero and section shortcuts.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        let state = auth.get();
        state
            .is_logged_in()
            .then(|| format!("{}님, 어디로 떠나볼까요?", state.greeting_name()))
    };

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Place Data"</h1>
                <p class="home-page__greeting">{greeting}</p>
                <a href="/domestic" class="home-page__search">
                    <span class="home-page__search-icon" aria-hidden="true"></span>
                    "지친 나를 위한 힐링 여행"
                </a>
            </section>
            <section class="home-page__shortcuts">
                <a href="/domestic" class="home-page__card">"국내여행"</a>
                <a href="/theme" class="home-page__card">"테마여행"</a>
                <a href="/custom" class="home-page__card">"맞춤여행"</a>
                <a href="/reviews" class="home-page__card">"여행후기"</a>
            </section>
        </div>
    }
}
