//! Transport Seam
//!
//! The only way the core talks to the server. The frontend implements it on
//! top of `window.fetch`; tests script it.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::{SyncError, SyncResult};

/// Characters `encodeURIComponent` leaves untouched
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query value or a single path segment
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Status line and body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body, whatever the status
    pub fn json<T: DeserializeOwned>(&self, path: &str) -> SyncResult<T> {
        serde_json::from_str(&self.body).map_err(|source| SyncError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// JSON-over-HTTP requests against the page's own origin
///
/// Futures are not `Send`: everything runs on the browser main thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> SyncResult<HttpResponse>;

    /// POST with an optional JSON body (sent as `application/json`)
    async fn post(&self, url: &str, json_body: Option<String>) -> SyncResult<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_matches_browser() {
        assert_eq!(encode_component("spicy veg"), "spicy%20veg");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("it's (hot)!"), "it's%20(hot)!");
        assert_eq!(encode_component("crème brûlée"), "cr%C3%A8me%20br%C3%BBl%C3%A9e");
    }

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(401, "").is_success());
    }

    #[test]
    fn test_decode_error_names_path() {
        let err = HttpResponse::new(500, "<html>")
            .json::<serde_json::Value>("/api/menu")
            .unwrap_err();
        assert!(err.to_string().contains("/api/menu"));
    }
}
