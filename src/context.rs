//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use view_sync::ViewSync;

use crate::page::Page;
use crate::store::PageStore;
use crate::surface::PageSurface;
use crate::transport::FetchTransport;

/// Controller wired to the browser
pub type PageSync = ViewSync<FetchTransport, PageSurface>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Controller, built once per page load (not `Send`, kept in local storage)
    sync: StoredValue<Rc<PageSync>, LocalStorage>,
    pub store: PageStore,
    pub page: Page,
}

impl AppContext {
    pub fn new(sync: PageSync, store: PageStore, page: Page) -> Self {
        Self {
            sync: StoredValue::new_local(Rc::new(sync)),
            store,
            page,
        }
    }

    /// Run a controller operation as an independent task
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<PageSync>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let sync = self.sync.get_value();
        spawn_local(op(sync));
    }

    /// Run a synchronous controller operation
    pub fn with<R>(&self, f: impl FnOnce(&PageSync) -> R) -> R {
        self.sync.with_value(|sync| f(sync))
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
