//! Page Surface
//!
//! `view_sync::Surface` over the page store plus the few browser calls
//! that are not rendering (alerts, navigation, reload).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use view_sync::{Card, CartSummary, Category, Modal, SearchView, Surface, ViewMode};

use crate::page::Page;
use crate::store::{store_reset_login, store_show_toast, PageStateStoreFields, PageStore};

#[derive(Clone, Copy)]
pub struct PageSurface {
    store: PageStore,
    page: Page,
    toast_ms: u32,
}

impl PageSurface {
    pub fn new(store: PageStore, page: Page, toast_ms: u32) -> Self {
        Self {
            store,
            page,
            toast_ms,
        }
    }

    fn modal_flag(&self, modal: Modal, open: bool) {
        match modal {
            Modal::Login => self.store.login_open().set(open),
            Modal::Register => self.store.register_open().set(open),
            Modal::Booking => self.store.booking_open().set(open),
        }
    }
}

impl Surface for PageSurface {
    fn replace_grid(&self, category: Category, cards: Vec<Card>) {
        self.store.grids().write().insert(category, cards);
    }

    fn render_cart(&self, summary: CartSummary) {
        self.store.cart().set(summary);
    }

    fn has_cart_badge(&self) -> bool {
        self.page.has_cart_badge()
    }

    fn set_cart_badge(&self, count: i64) {
        self.store.cart_count().set(count);
    }

    fn toast(&self, message: &str) {
        store_show_toast(&self.store, message, self.toast_ms);
    }

    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else { return };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("Alert {:?} failed: {:?}", message, e);
        }
    }

    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else { return };
        if let Err(e) = window.location().set_href(url) {
            log::error!("Navigation to {} failed: {:?}", url, e);
        }
    }

    fn reload_after(&self, delay_ms: u32) {
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().reload() {
                    log::error!("Reload failed: {:?}", e);
                }
            }
        });
    }

    fn set_view_mode(&self, mode: ViewMode) {
        self.store.view_mode().set(mode);
    }

    fn set_search_loading(&self, loading: bool) {
        self.store.search_loading().set(loading);
    }

    fn render_search(&self, view: SearchView) {
        self.store.search().set(view);
    }

    fn clear_search_input(&self) {
        self.store.search_input().set(String::new());
    }

    fn show_sections(&self, visible: &[Category]) {
        self.store.visible_sections().set(visible.to_vec());
    }

    fn set_active_filter(&self, control: &str) {
        self.store.active_filter().set(control.to_string());
    }

    fn open_modal(&self, modal: Modal) {
        if modal == Modal::Login {
            store_reset_login(&self.store);
        }
        self.modal_flag(modal, true);
    }

    fn close_modal(&self, modal: Modal) {
        if modal == Modal::Login {
            store_reset_login(&self.store);
        }
        self.modal_flag(modal, false);
    }

    fn reset_booking_form(&self) {
        self.store.booking_form().set(Default::default());
    }

    fn set_description_suggestion(&self, text: &str) {
        self.store.description_suggestion().set(text.to_string());
    }
}
