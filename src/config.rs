//! Page Configuration
//!
//! Pages may embed overrides as
//! `<script id="dine-config" type="application/json">{...}</script>`.

use view_sync::{ClientConfig, SyncResult};

const CONFIG_ELEMENT_ID: &str = "dine-config";

/// `Ok(None)` when the page carries no config element
pub fn read_page_config() -> SyncResult<Option<ClientConfig>> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => ClientConfig::from_json(&raw).map(Some),
        _ => Ok(None),
    }
}
