//! Table booking endpoint

use super::Api;
use crate::error::SyncResult;
use crate::model::{BookingRequest, StatusReply};
use crate::transport::Transport;

impl<T: Transport> Api<T> {
    pub async fn book_table(&self, request: &BookingRequest) -> SyncResult<StatusReply> {
        let url = &self.endpoints.book_table;
        self.post_json(url, request).await?.json(url)
    }
}
