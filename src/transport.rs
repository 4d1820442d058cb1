//! Fetch Transport
//!
//! `view_sync::Transport` over `window.fetch`. Requests go to the page's own
//! origin, so the session cookie rides along.

use async_trait::async_trait;
use view_sync::{HttpResponse, SyncError, SyncResult, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn get(&self, url: &str) -> SyncResult<HttpResponse> {
        fetch("GET", url, None).await
    }

    async fn post(&self, url: &str, json_body: Option<String>) -> SyncResult<HttpResponse> {
        fetch("POST", url, json_body).await
    }
}

async fn fetch(method: &str, url: &str, body: Option<String>) -> SyncResult<HttpResponse> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = &body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
    }

    let window = web_sys::window().ok_or_else(|| SyncError::Transport("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok(HttpResponse::new(
        response.status(),
        text.as_string().unwrap_or_default(),
    ))
}

fn js_error(value: JsValue) -> SyncError {
    SyncError::Transport(format!("{:?}", value))
}
