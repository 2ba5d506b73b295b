//! Region search page.
//!
//! Every region click or (debounced) keystroke starts a new request; only the
//! newest one may update the list. The debounce wait runs inside the request,
//! so a superseded request is dropped before it ever reaches the network.

use leptos::prelude::*;
use session::request::LatestOnly;

use crate::net::places::PlaceItem;
use crate::state::search::{SEARCH_DEBOUNCE_MS, SearchState, query_for};
use crate::util::region::{ALL_REGIONS, REGIONS};

#[component]
pub fn DomesticPage() -> impl IntoView {
    let region = RwSignal::new(ALL_REGIONS.to_owned());
    let keyword = RwSignal::new(String::new());
    let search = RwSignal::new(SearchState::default());
    // Dropped with the page, aborting whatever is still in flight.
    let latest: StoredValue<LatestOnly, LocalStorage> = StoredValue::new_local(LatestOnly::new());

    let run = move |delay_ms: u32| {
        let query = query_for(&region.get_untracked(), &keyword.get_untracked());

        #[cfg(feature = "csr")]
        {
            use crate::net::places::{list_places, search_places};
            use crate::state::search::PlaceQuery;

            let request = latest.with_value(|latest| {
                latest.begin(async move {
                    if delay_ms > 0 {
                        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                    }
                    search.update(SearchState::begin);
                    match query {
                        PlaceQuery::All => list_places().await,
                        PlaceQuery::Search(req) => search_places(&req).await,
                    }
                })
            });
            leptos::task::spawn_local(async move {
                if let Ok(outcome) = request.await {
                    search.update(|s| s.finish(outcome));
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (query, delay_ms, latest, search);
    };

    Effect::new(move || {
        region.track();
        run(0);
    });

    let on_keyword = move |ev: leptos::ev::Event| {
        keyword.set(event_target_value(&ev));
        run(SEARCH_DEBOUNCE_MS);
    };

    view! {
        <div class="domestic-page">
            <section class="domestic-page__regions">
                <div class="step-label">"STEP_1 지역 선택"</div>
                <div class="region-tags" aria-label="지역 선택 칩">
                    {REGIONS
                        .iter()
                        .map(|&name| {
                            view! {
                                <button
                                    type="button"
                                    class="region-tag"
                                    class:selected=move || region.with(|r| r == name)
                                    on:click=move |_| region.set(name.to_owned())
                                >
                                    {name}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <p class="domestic-page__current">"현재 선택: " <span class="highlight">{move || region.get()}</span></p>
            </section>

            <section class="domestic-page__list">
                <div class="list-header">
                    <div class="step-label">"STEP_2 여행지 리스트"</div>
                    <input
                        class="search-input"
                        placeholder="제목 검색"
                        prop:value=move || keyword.get()
                        on:input=on_keyword
                    />
                </div>
                {move || search.with(|s| s.error.clone()).map(|e| view! { <p class="status status-error">"⚠ " {e}</p> })}
                <Show when=move || search.with(|s| s.loading)>
                    <p class="status status-loading">"불러오는 중..."</p>
                </Show>
                <div class="results-scroll">
                    {move || {
                        let items = search.with(|s| s.visible(&region.get()));
                        if items.is_empty() {
                            view! { <p class="regionlist-empty">"조건에 맞는 결과가 없어요."</p> }.into_any()
                        } else {
                            view! {
                                <ul class="regionlist-ul">
                                    {items.into_iter().map(|item| view! { <PlaceRow item=item/> }).collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </section>
        </div>
    }
}

#[component]
fn PlaceRow(item: PlaceItem) -> impl IntoView {
    let category = item.category.map(|c| format!(" · 카테고리: {c}"));
    view! {
        <li class="regionlist-li">
            <p class="regionlist-title">{item.title}</p>
            <p class="regionlist-sub">
                "지역: " {item.location.unwrap_or_else(|| "-".to_owned())} {category}
            </p>
            {item.address.map(|a| view! { <p class="regionlist-sub">"주소: " {a}</p> })}
            {item.message.map(|m| view! { <p class="regionlist-sub">"메시지: " {m}</p> })}
        </li>
    }
}
