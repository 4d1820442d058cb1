//! Page Identification
//!
//! The server renders one shell per route; the frontend picks what to
//! mount from the current path.

/// Route the shell was served for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Menu,
    Cart,
    AdminMenu,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/menu" => Page::Menu,
            "/cart" => Page::Cart,
            "/admin/menu" => Page::AdminMenu,
            _ => Page::Home,
        }
    }

    /// Page of the current document, `Home` when unknown
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Page::from_path(&path))
            .unwrap_or(Page::Home)
    }

    /// Pages whose nav bar carries the cart badge
    pub fn has_cart_badge(self) -> bool {
        matches!(self, Page::Menu | Page::Cart)
    }
}

/// `location.search` of the current document (`"?a=b"` or empty)
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}
