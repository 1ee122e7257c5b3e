pub mod state;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_packing::api;
use crate::shared::config::AppConfig;
use crate::shared::http::use_api;
use state::{SearchAction, SearchState};

/// Packing-number input with debounced autocomplete.
///
/// Picking a suggestion, pressing Enter or clicking Search hands the
/// packing number to `on_select`, which opens the record.
#[component]
pub fn PackingSearch(
    on_select: Callback<String>,
    /// A detail fetch is running
    #[prop(into)]
    busy: Signal<bool>,
) -> impl IntoView {
    let api_client = use_api();
    let config = use_context::<AppConfig>().expect("AppConfig not found in component tree");
    let debounce_ms = config.search_debounce_ms;
    let search = RwSignal::new(SearchState::new(config.search_min_chars));

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let action = search.try_update(|s| s.input(value));
        let Some(SearchAction::Schedule { ticket, term }) = action else {
            return;
        };

        let api_client = api_client.clone();
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if !search.with_untracked(|s| s.is_current(ticket)) {
                return;
            }
            match api::search(&api_client, &term).await {
                Ok(hits) => {
                    search.update(|s| {
                        s.apply(ticket, hits);
                    });
                }
                Err(e) => log::warn!("Search for '{}' failed: {}", term, e),
            }
        });
    };

    let choose = move |pack_nomor: String| {
        if let Some(selected) = search.try_update(|s| s.select(&pack_nomor)) {
            on_select.run(selected);
        }
    };

    let submit = move || {
        let term = search.with_untracked(|s| s.term.trim().to_string());
        if !term.is_empty() {
            choose(term);
        }
    };

    view! {
        <div class="search-box">
            <input
                type="text"
                placeholder="Or search a packing number..."
                prop:value=move || search.with(|s| s.term.clone())
                on:input=on_input
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        submit();
                    }
                }
            />
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| submit()
                disabled=busy
            >
                {move || if busy.get() { "Searching..." } else { "Search" }}
            </Button>
        </div>

        <Show when=move || search.with(|s| !s.results.is_empty())>
            <ul class="search-results">
                {move || {
                    search
                        .with(|s| s.results.clone())
                        .into_iter()
                        .map(|hit| {
                            let pack_nomor = hit.pack_nomor.clone();
                            view! {
                                <li on:click=move |_| choose(pack_nomor.clone())>
                                    {hit.pack_nomor}
                                    " "
                                    <span class="spk-result">{format!("({})", hit.pack_spk_nomor)}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}
