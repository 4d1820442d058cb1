//! Client Configuration
//!
//! Endpoint paths and presentation constants. Every field has a default,
//! so a page only needs to embed the values it overrides.

use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

/// Server endpoint paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub menu: String,
    pub cart: String,
    pub cart_add: String,
    pub cart_clear: String,
    pub cart_count: String,
    pub order_confirm: String,
    pub search: String,
    pub book_table: String,
    pub login: String,
    pub register: String,
    pub ai_description: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            menu: "/api/menu".to_string(),
            cart: "/api/cart".to_string(),
            cart_add: "/api/cart/add".to_string(),
            cart_clear: "/api/cart/clear".to_string(),
            cart_count: "/api/cart/count".to_string(),
            order_confirm: "/api/order/confirm".to_string(),
            search: "/api/search".to_string(),
            book_table: "/api/book-table".to_string(),
            login: "/login".to_string(),
            register: "/api/register".to_string(),
            ai_description: "/api/ai-description".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    /// Hard navigation target when the cart rejects an anonymous user
    pub login_page: String,
    /// Home page URL that opens the login modal on load
    pub login_prompt_url: String,
    /// Prefix for menu item image filenames
    pub image_base: String,
    pub fallback_description: String,
    pub toast_ms: u32,
    pub login_reload_delay_ms: u32,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            login_page: "/login".to_string(),
            login_prompt_url: "/?login=true".to_string(),
            image_base: "/static/images/".to_string(),
            fallback_description: "Delicious dish from our kitchen".to_string(),
            toast_ms: 2500,
            login_reload_delay_ms: 300,
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse an override document. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> SyncResult<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| SyncError::Config(e.to_string()))?;
        if config.toast_ms == 0 {
            return Err(SyncError::Config("toast_ms must be positive".to_string()));
        }
        Ok(config)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            ClientConfig::from_json(r#"{"endpoints":{"search":"/v2/search"},"toast_ms":1000}"#)
                .unwrap();
        assert_eq!(config.endpoints.search, "/v2/search");
        assert_eq!(config.endpoints.menu, "/api/menu");
        assert_eq!(config.toast_ms, 1000);
        assert_eq!(config.login_page, "/login");
    }

    #[test]
    fn test_invalid_document() {
        assert!(matches!(
            ClientConfig::from_json("{not json"),
            Err(SyncError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_json(r#"{"toast_ms":0}"#),
            Err(SyncError::Config(_))
        ));
    }

    #[test]
    fn test_log_level_fallback() {
        let mut config = ClientConfig::default();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_log_level_off_has_no_console_level() {
        let mut config = ClientConfig::default();
        assert_eq!(config.log_level().to_level(), Some(log::Level::Info));
        config.log_level = "off".to_string();
        assert_eq!(config.log_level().to_level(), None);
    }
}
