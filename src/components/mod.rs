//! UI Components
//!
//! Leptos components for the restaurant pages. All item text is rendered
//! as text nodes or attribute values, never as raw markup.

mod nav_bar;
mod home_page;
mod menu_page;
mod menu_card;
mod search_panel;
mod cart_page;
mod toast_stack;
mod login_modal;
mod register_modal;
mod booking_modal;
mod admin_menu_page;

pub use nav_bar::NavBar;
pub use home_page::HomePage;
pub use menu_page::MenuPage;
pub use menu_card::MenuCard;
pub use search_panel::SearchPanel;
pub use cart_page::CartPage;
pub use toast_stack::ToastStack;
pub use login_modal::LoginModal;
pub use register_modal::RegisterModal;
pub use booking_modal::BookingModal;
pub use admin_menu_page::AdminMenuPage;
