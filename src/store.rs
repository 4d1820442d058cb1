//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! the rendered state of the page; the controller writes it through
//! `PageSurface` and components read it.

use std::collections::BTreeMap;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use view_sync::{BookingForm, Card, CartSummary, Category, CategoryFilter, SearchView, ViewMode};

/// Toast fade-in and fade-out timings (match the stylesheet transitions)
const TOAST_FADE_IN_MS: u32 = 100;
const TOAST_FADE_OUT_MS: u32 = 400;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    /// `show` class applied
    pub shown: bool,
}

/// Rendered page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Cards per category grid
    pub grids: BTreeMap<Category, Vec<Card>>,
    pub visible_sections: Vec<Category>,
    pub active_filter: String,
    pub cart: CartSummary,
    pub cart_count: i64,
    pub view_mode: ViewMode,
    pub search_loading: bool,
    pub search: SearchView,
    pub search_input: String,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
    pub login_open: bool,
    pub register_open: bool,
    pub booking_open: bool,
    pub login_username: String,
    pub login_password: String,
    pub booking_form: BookingForm,
    pub description_suggestion: String,
}

impl PageState {
    pub fn new() -> Self {
        Self {
            visible_sections: Category::ALL.to_vec(),
            active_filter: CategoryFilter::ALL_KEY.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_grid(store: &PageStore, category: Category) -> Vec<Card> {
    store
        .grids()
        .read()
        .get(&category)
        .cloned()
        .unwrap_or_default()
}

pub fn store_reset_login(store: &PageStore) {
    store.login_username().set(String::new());
    store.login_password().set(String::new());
}

/// Push a toast, fade it in, and remove it after `visible_ms`
pub fn store_show_toast(store: &PageStore, message: &str, visible_ms: u32) {
    let store = *store;
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast {
        id,
        message: message.to_string(),
        shown: false,
    });

    spawn_local(async move {
        TimeoutFuture::new(TOAST_FADE_IN_MS).await;
        store_set_toast_shown(&store, id, true);
        TimeoutFuture::new(visible_ms).await;
        store_set_toast_shown(&store, id, false);
        TimeoutFuture::new(TOAST_FADE_OUT_MS).await;
        store.toasts().write().retain(|toast| toast.id != id);
    });
}

fn store_set_toast_shown(store: &PageStore, id: u32, shown: bool) {
    if let Some(toast) = store.toasts().write().iter_mut().find(|t| t.id == id) {
        toast.shown = shown;
    }
}
