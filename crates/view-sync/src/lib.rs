//! View-Sync Core
//!
//! Keeps the restaurant pages consistent with the server: menu grids,
//! cart listing and badge, search results and the category filter.
//!
//! The crate never touches the browser. Network access goes through
//! [`Transport`] and every visible change goes through [`Surface`], so the
//! frontend injects its fetch binding and its DOM targets once per page load.

mod card;
mod config;
mod controller;
mod error;
mod model;
mod surface;
mod transport;

pub mod api;

#[cfg(test)]
mod testing;

pub use card::{format_amount, price_label, Card};
pub use config::{ClientConfig, Endpoints};
pub use controller::{BookingForm, CategoryFilter, ViewSync};
pub use error::{SyncError, SyncResult};
pub use model::{
    AddOutcome, BookingRequest, Cart, CartCount, CartLine, CartSummary, CartSummaryLine,
    Category, Credentials, ItemKey, LoginReply, MenuItem, StatusReply,
};
pub use surface::{Modal, SearchView, Surface, ViewMode};
pub use transport::{encode_component, HttpResponse, Transport};
