//! Search Panel Component
//!
//! Results wrapper shown in search mode, with its loader and close button.

use leptos::prelude::*;
use view_sync::{SearchView, ViewMode};

use crate::components::MenuCard;
use crate::context::use_app;
use crate::store::PageStateStoreFields;

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let wrapper_display = move || {
        if store.view_mode().get() == ViewMode::Search { "block" } else { "none" }
    };
    let loader_display = move || if store.search_loading().get() { "block" } else { "none" };

    view! {
        <div id="searchWrapper" class="search-wrapper" style:display=wrapper_display>
            <button class="close-search" on:click=move |_| ctx.with(|sync| sync.close_search())>
                "×"
            </button>
            <div id="searchLoader" class="search-loader" style:display=loader_display>
                "Finding dishes for you..."
            </div>
            <div id="searchResults" class="search-results">
                {move || match store.search().get() {
                    SearchView::Pending => ().into_any(),
                    SearchView::NoResults => view! {
                        <p class="no-results">"No matching dishes found"</p>
                    }.into_any(),
                    SearchView::Results(cards) => cards
                        .into_iter()
                        .map(|card| view! { <MenuCard card=card /> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}
