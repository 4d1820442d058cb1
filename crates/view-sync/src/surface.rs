//! Surface Trait
//!
//! The injected view targets. The controller only ever talks to the page
//! through this trait, so tests can substitute a recording fake.

use crate::card::Card;
use crate::model::{CartSummary, Category};

/// Which top-level section is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Menu,
    Search,
}

/// Content of the search results container
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchView {
    /// Cleared, waiting for a response
    #[default]
    Pending,
    Results(Vec<Card>),
    /// Single "no matching dishes" placeholder
    NoResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Login,
    Register,
    Booking,
}

pub trait Surface {
    /// Replace the whole grid of one category
    fn replace_grid(&self, category: Category, cards: Vec<Card>);

    /// Replace the cart listing and write the total
    fn render_cart(&self, summary: CartSummary);

    /// Whether the current page shows a cart badge
    fn has_cart_badge(&self) -> bool;
    fn set_cart_badge(&self, count: i64);

    /// Transient, auto-dismissing notification
    fn toast(&self, message: &str);
    /// Blocking notice the user has to acknowledge
    fn notify(&self, message: &str);

    /// Hard navigation away from the page
    fn navigate(&self, url: &str);
    fn reload_after(&self, delay_ms: u32);

    fn set_view_mode(&self, mode: ViewMode);
    fn set_search_loading(&self, loading: bool);
    fn render_search(&self, view: SearchView);
    fn clear_search_input(&self);

    /// Show exactly these category sections, hide the rest
    fn show_sections(&self, visible: &[Category]);
    /// Mark the filter control with this key as the single active one
    fn set_active_filter(&self, control: &str);

    fn open_modal(&self, modal: Modal);
    /// Closing the login modal also resets its inputs
    fn close_modal(&self, modal: Modal);
    fn reset_booking_form(&self);

    fn set_description_suggestion(&self, text: &str);
}
