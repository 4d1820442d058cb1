//! Cart and order endpoints

use super::Api;
use crate::error::SyncResult;
use crate::model::{AddOutcome, AddReply, AddToCartArgs, Cart, CartCount, ConfirmArgs};
use crate::transport::Transport;

impl<T: Transport> Api<T> {
    pub async fn add_to_cart(&self, item_id: u32, price: f64) -> SyncResult<AddOutcome> {
        let url = &self.endpoints.cart_add;
        let response = self
            .post_json(url, &AddToCartArgs { item_id, price })
            .await?;
        if response.status == 401 {
            return Ok(AddOutcome::LoginRequired);
        }

        let reply: AddReply = response.json(url)?;
        match reply.status.as_deref() {
            Some("added") => Ok(AddOutcome::Added),
            _ => Ok(AddOutcome::Rejected(reply.status)),
        }
    }

    /// Full cart mapping; a `null` body reads as the empty cart
    pub async fn cart(&self) -> SyncResult<Cart> {
        let cart: Option<Cart> = self.get_json(&self.endpoints.cart).await?;
        Ok(cart.unwrap_or_default())
    }

    /// Any completed response counts, the caller re-reads the cart anyway
    pub async fn clear_cart(&self) -> SyncResult<()> {
        let response = self.transport.post(&self.endpoints.cart_clear, None).await?;
        if !response.is_success() {
            log::warn!("cart clear answered HTTP {}", response.status);
        }
        Ok(())
    }

    pub async fn cart_count(&self) -> SyncResult<i64> {
        let reply: CartCount = self.get_json(&self.endpoints.cart_count).await?;
        Ok(reply.count)
    }

    /// `true` when the server accepted the order
    pub async fn confirm_order(&self) -> SyncResult<bool> {
        let response = self
            .post_json(&self.endpoints.order_confirm, &ConfirmArgs { confirm: true })
            .await?;
        Ok(response.is_success())
    }
}
