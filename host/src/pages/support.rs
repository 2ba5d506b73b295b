//! Customer support page.

use leptos::prelude::*;

#[component]
pub fn SupportPage() -> impl IntoView {
    view! {
        <div class="support-page">
            <h1>"고객센터"</h1>
            <p>"문의 사항은 help@placedata.example 로 보내 주세요."</p>
        </div>
    }
}
