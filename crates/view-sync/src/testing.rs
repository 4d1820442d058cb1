//! Test doubles: a scripted transport and a recording surface.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};

use async_trait::async_trait;

use crate::card::Card;
use crate::error::{SyncError, SyncResult};
use crate::model::{CartSummary, Category};
use crate::surface::{Modal, SearchView, Surface, ViewMode};
use crate::transport::{HttpResponse, Transport};

// ========================
// Transport
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

struct Scripted {
    result: Result<HttpResponse, String>,
    /// Scheduler yields before answering, to let other tasks overtake
    yields: u32,
}

#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<HashMap<String, VecDeque<Scripted>>>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, url: &str, result: Result<HttpResponse, String>, yields: u32) -> Self {
        self.replies
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(Scripted { result, yields });
        self
    }

    pub fn reply(self, url: &str, status: u16, body: &str) -> Self {
        self.push(url, Ok(HttpResponse::new(status, body)), 0)
    }

    pub fn slow_reply(self, url: &str, status: u16, body: &str, yields: u32) -> Self {
        self.push(url, Ok(HttpResponse::new(status, body)), yields)
    }

    pub fn fail(self, url: &str, message: &str) -> Self {
        self.push(url, Err(message.to_string()), 0)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// `"METHOD url"` for every request, in issue order
    pub fn requests(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| format!("{} {}", c.method, c.url))
            .collect()
    }

    async fn answer(&self, method: &'static str, url: &str, body: Option<String>) -> SyncResult<HttpResponse> {
        self.calls.borrow_mut().push(Call {
            method,
            url: url.to_string(),
            body,
        });
        let scripted = self
            .replies
            .borrow_mut()
            .get_mut(url)
            .and_then(|queue| queue.pop_front());
        let Some(scripted) = scripted else {
            return Err(SyncError::Transport(format!("no reply scripted for {url}")));
        };
        for _ in 0..scripted.yields {
            tokio::task::yield_now().await;
        }
        scripted.result.map_err(SyncError::Transport)
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> SyncResult<HttpResponse> {
        self.answer("GET", url, None).await
    }

    async fn post(&self, url: &str, json_body: Option<String>) -> SyncResult<HttpResponse> {
        self.answer("POST", url, json_body).await
    }
}

// ========================
// Surface
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Grid(Category, Vec<u32>),
    Cart(CartSummary),
    Badge(i64),
    Toast(String),
    Notice(String),
    Navigate(String),
    Reload(u32),
    Mode(ViewMode),
    Loading(bool),
    Search(SearchView),
    ClearInput,
    Sections(Vec<Category>),
    Active(String),
    Open(Modal),
    Close(Modal),
    ResetBooking,
    Description(String),
}

/// Records every call and keeps the grid contents a page would show
pub struct RecordingSurface {
    badge: bool,
    events: RefCell<Vec<Event>>,
    grids: RefCell<BTreeMap<Category, Vec<Card>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::with_badge(true)
    }

    pub fn with_badge(badge: bool) -> Self {
        Self {
            badge,
            events: RefCell::new(Vec::new()),
            grids: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn grid_ids(&self, category: Category) -> Vec<u32> {
        self.grids
            .borrow()
            .get(&category)
            .map(|cards| cards.iter().map(|c| c.item_id).collect())
            .unwrap_or_default()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.borrow().iter().filter(|e| pred(e)).count()
    }

    pub fn last_search(&self) -> Option<SearchView> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            Event::Search(view) => Some(view.clone()),
            _ => None,
        })
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl Surface for RecordingSurface {
    fn replace_grid(&self, category: Category, cards: Vec<Card>) {
        self.record(Event::Grid(category, cards.iter().map(|c| c.item_id).collect()));
        self.grids.borrow_mut().insert(category, cards);
    }

    fn render_cart(&self, summary: CartSummary) {
        self.record(Event::Cart(summary));
    }

    fn has_cart_badge(&self) -> bool {
        self.badge
    }

    fn set_cart_badge(&self, count: i64) {
        self.record(Event::Badge(count));
    }

    fn toast(&self, message: &str) {
        self.record(Event::Toast(message.to_string()));
    }

    fn notify(&self, message: &str) {
        self.record(Event::Notice(message.to_string()));
    }

    fn navigate(&self, url: &str) {
        self.record(Event::Navigate(url.to_string()));
    }

    fn reload_after(&self, delay_ms: u32) {
        self.record(Event::Reload(delay_ms));
    }

    fn set_view_mode(&self, mode: ViewMode) {
        self.record(Event::Mode(mode));
    }

    fn set_search_loading(&self, loading: bool) {
        self.record(Event::Loading(loading));
    }

    fn render_search(&self, view: SearchView) {
        self.record(Event::Search(view));
    }

    fn clear_search_input(&self) {
        self.record(Event::ClearInput);
    }

    fn show_sections(&self, visible: &[Category]) {
        self.record(Event::Sections(visible.to_vec()));
    }

    fn set_active_filter(&self, control: &str) {
        self.record(Event::Active(control.to_string()));
    }

    fn open_modal(&self, modal: Modal) {
        self.record(Event::Open(modal));
    }

    fn close_modal(&self, modal: Modal) {
        self.record(Event::Close(modal));
    }

    fn reset_booking_form(&self) {
        self.record(Event::ResetBooking);
    }

    fn set_description_suggestion(&self, text: &str) {
        self.record(Event::Description(text.to_string()));
    }
}
