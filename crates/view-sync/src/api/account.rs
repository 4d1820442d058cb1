//! Login and registration endpoints
//!
//! Both answer rejections with a JSON body and a 4xx status, so the body is
//! decoded whatever the status.

use super::Api;
use crate::error::SyncResult;
use crate::model::{Credentials, LoginReply, StatusReply};
use crate::transport::Transport;

impl<T: Transport> Api<T> {
    pub async fn login(&self, credentials: &Credentials<'_>) -> SyncResult<LoginReply> {
        let url = &self.endpoints.login;
        self.post_json(url, credentials).await?.json(url)
    }

    pub async fn register(&self, credentials: &Credentials<'_>) -> SyncResult<StatusReply> {
        let url = &self.endpoints.register;
        self.post_json(url, credentials).await?.json(url)
    }
}
