//! Menu, search and description endpoints

use super::Api;
use crate::error::SyncResult;
use crate::model::{DescriptionReply, MenuItem};
use crate::transport::{encode_component, Transport};

impl<T: Transport> Api<T> {
    pub async fn menu(&self) -> SyncResult<Vec<MenuItem>> {
        self.get_json(&self.endpoints.menu).await
    }

    /// AI-assisted lookup; can take seconds.
    ///
    /// Results are generated, not schema-checked: entries that do not read
    /// as a menu item are skipped and the rest are kept.
    pub async fn search(&self, query: &str) -> SyncResult<Vec<MenuItem>> {
        let url = format!("{}?q={}", self.endpoints.search, encode_component(query));
        let entries: Vec<serde_json::Value> = self.get_json(&url).await?;
        Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("Skipping search result {} for {:?}: {}", index, query, e);
                    None
                }
            })
            .collect())
    }

    pub async fn ai_description(&self, name: &str) -> SyncResult<String> {
        let url = format!(
            "{}?name={}",
            self.endpoints.ai_description,
            encode_component(name)
        );
        let reply: DescriptionReply = self.get_json(&url).await?;
        Ok(reply.description)
    }
}
