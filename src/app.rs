//! Dine Frontend App
//!
//! Builds the controller for this page load, runs the startup fetches and
//! mounts the page body for the current route.

use leptos::prelude::*;
use reactive_stores::Store;
use view_sync::{ClientConfig, ViewMode, ViewSync};

use crate::components::{
    AdminMenuPage, BookingModal, CartPage, HomePage, LoginModal, MenuPage, NavBar, RegisterModal,
    ToastStack,
};
use crate::context::AppContext;
use crate::page::{current_query, Page};
use crate::store::{PageState, PageStateStoreFields};
use crate::surface::PageSurface;
use crate::transport::FetchTransport;

const SEARCH_ACTIVE_CLASS: &str = "search-active";

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let page = Page::current();
    let store = Store::new(PageState::new());

    let surface = PageSurface::new(store, page, config.toast_ms);
    let ctx = AppContext::new(ViewSync::new(FetchTransport, surface, config), store, page);
    provide_context(ctx);

    // Startup, once per page load
    Effect::new(move |_| {
        log::info!("Page start: {:?}", page);
        ctx.with(|sync| sync.open_login_if_requested(&current_query()));
        ctx.spawn(|sync| async move { sync.refresh_cart_count().await });
        match page {
            Page::Menu => ctx.spawn(|sync| async move { sync.load_menu().await }),
            Page::Cart => ctx.spawn(|sync| async move { sync.load_cart().await }),
            Page::Home | Page::AdminMenu => {}
        }
    });

    // Body class suppresses page scroll chrome while search results are up
    Effect::new(move |_| {
        let active = store.view_mode().get() == ViewMode::Search;
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        if let Some(body) = body {
            if let Err(e) = body.class_list().toggle_with_force(SEARCH_ACTIVE_CLASS, active) {
                log::error!("Toggling {} failed: {:?}", SEARCH_ACTIVE_CLASS, e);
            }
        }
    });

    view! {
        <NavBar />
        <main class="page-content">
            {match page {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Menu => view! { <MenuPage /> }.into_any(),
                Page::Cart => view! { <CartPage /> }.into_any(),
                Page::AdminMenu => view! { <AdminMenuPage /> }.into_any(),
            }}
        </main>
        <LoginModal />
        <RegisterModal />
        <BookingModal />
        <ToastStack />
    }
}
