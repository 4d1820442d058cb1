//! API Bindings
//!
//! Typed wrappers over the server endpoints, organized by domain.

mod account;
mod booking;
mod cart;
mod menu;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Endpoints;
use crate::error::{SyncError, SyncResult};
use crate::transport::{HttpResponse, Transport};

/// Endpoint bindings over a transport
pub struct Api<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// GET and decode, treating any non-2xx status as an error
    async fn get_json<R: DeserializeOwned>(&self, url: &str) -> SyncResult<R> {
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(SyncError::Status {
                path: url.to_string(),
                status: response.status,
            });
        }
        response.json(url)
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> SyncResult<HttpResponse> {
        let body = serde_json::to_string(body)?;
        self.transport.post(url, Some(body)).await
    }
}
