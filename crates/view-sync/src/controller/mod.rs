//! View-Sync Controller
//!
//! One instance per page load. Each operation issues its own requests and
//! re-renders from the latest response; nothing is cached between calls.
//! Failures never escape: they are logged, and surfaced as a notice only
//! where the user has to react.

mod account;
mod booking;
mod cart;
mod filter;
mod menu;
mod search;


use std::cell::Cell;

pub use booking::BookingForm;
pub use filter::CategoryFilter;

use crate::api::Api;
use crate::card::Card;
use crate::config::ClientConfig;
use crate::model::MenuItem;
use crate::surface::Surface;
use crate::transport::Transport;

pub struct ViewSync<T, S> {
    api: Api<T>,
    surface: S,
    config: ClientConfig,
    /// Bumped by every search and close; stale responses are dropped
    search_generation: Cell<u64>,
}

impl<T: Transport, S: Surface> ViewSync<T, S> {
    pub fn new(transport: T, surface: S, config: ClientConfig) -> Self {
        Self {
            api: Api::new(transport, config.endpoints.clone()),
            surface,
            config,
            search_generation: Cell::new(0),
        }
    }

    pub fn api(&self) -> &Api<T> {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn card(&self, item: &MenuItem) -> Card {
        Card::from_item(item, &self.config)
    }
}
