//! Menu Page Component
//!
//! Search bar, category filter and the four category grids.

use leptos::prelude::*;
use view_sync::{Category, CategoryFilter, ViewMode};

use crate::components::{MenuCard, SearchPanel};
use crate::context::use_app;
use crate::store::{store_grid, PageStateStoreFields};

#[component]
pub fn MenuPage() -> impl IntoView {
    let store = use_app().store;
    let menu_display = move || {
        if store.view_mode().get() == ViewMode::Menu { "block" } else { "none" }
    };

    view! {
        <SearchBar />
        <SearchPanel />
        <section class="menu-section" style:display=menu_display>
            <FilterBar />
            {Category::ALL
                .into_iter()
                .map(|category| view! { <CategorySection category=category /> })
                .collect_view()}
        </section>
    }
}

/// Query input; Enter or the button runs the search
#[component]
fn SearchBar() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let run = move || {
        let query = store.search_input().get_untracked();
        ctx.spawn(move |sync| async move { sync.search(&query).await });
    };

    view! {
        <div class="search-bar">
            <input
                id="searchBox"
                type="text"
                placeholder="Try \"something spicy\" or \"light dessert\""
                prop:value=move || store.search_input().get()
                on:input=move |ev| store.search_input().set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        run();
                    }
                }
            />
            <button class="search-btn" on:click=move |_| run()>"Search"</button>
        </div>
    }
}

/// "All" plus one button per category
#[component]
fn FilterBar() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let controls = std::iter::once((CategoryFilter::ALL_KEY, "All"))
        .chain(Category::ALL.into_iter().map(|c| (c.key(), c.label())));

    view! {
        <div class="filter-bar">
            {controls.map(move |(key, label)| {
                let is_active = move || store.active_filter().get() == key;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| ctx.with(|sync| sync.show_category(&CategoryFilter::parse(key), key))
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn CategorySection(category: Category) -> impl IntoView {
    let store = use_app().store;
    let display = move || {
        if store.visible_sections().read().contains(&category) { "block" } else { "none" }
    };

    view! {
        <div class="menu-category" id=category.key() style:display=display>
            <h2>{category.label()}</h2>
            <div class="menu-grid">
                {move || store_grid(&store, category)
                    .into_iter()
                    .map(|card| view! { <MenuCard card=card /> })
                    .collect_view()}
            </div>
        </div>
    }
}
