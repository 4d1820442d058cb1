//! Cart and order confirmation

use super::ViewSync;
use crate::model::AddOutcome;
use crate::surface::Surface;
use crate::transport::Transport;

const ADDED_TOAST: &str = "Food added to cart";
const EMPTY_CART_NOTICE: &str = "Please select at least 1 item from menu";
const ORDER_OK_NOTICE: &str = "Order Successful";
const ORDER_FAILED_NOTICE: &str = "Order failed";

impl<T: Transport, S: Surface> ViewSync<T, S> {
    /// Add one unit of an item. Anonymous users are sent to the login page.
    pub async fn add_to_cart(&self, item_id: u32, price: f64) {
        match self.api.add_to_cart(item_id, price).await {
            Ok(AddOutcome::Added) => {
                self.surface.toast(ADDED_TOAST);
                self.refresh_cart_count().await;
            }
            Ok(AddOutcome::LoginRequired) => {
                self.surface.navigate(&self.config.login_page);
            }
            Ok(AddOutcome::Rejected(status)) => {
                log::debug!("Add to cart for item {} not accepted: {:?}", item_id, status);
            }
            Err(e) => log::error!("Add to cart failed: {}", e),
        }
    }

    /// Re-render the cart listing and total from the server
    pub async fn load_cart(&self) {
        match self.api.cart().await {
            Ok(cart) => self.surface.render_cart(cart.summarize()),
            Err(e) => log::error!("Cart load failed: {}", e),
        }
    }

    pub async fn clear_cart(&self) {
        if let Err(e) = self.api.clear_cart().await {
            log::error!("Cart clear failed: {}", e);
            return;
        }
        self.load_cart().await;
    }

    /// Update the badge; pages without one still make the request
    pub async fn refresh_cart_count(&self) {
        match self.api.cart_count().await {
            Ok(count) => {
                if self.surface.has_cart_badge() {
                    self.surface.set_cart_badge(count);
                }
            }
            Err(e) => log::error!("Cart count failed: {}", e),
        }
    }

    pub async fn confirm_order(&self) {
        let cart = match self.api.cart().await {
            Ok(cart) => cart,
            Err(e) => {
                log::error!("Cart load before confirm failed: {}", e);
                return;
            }
        };
        if cart.is_empty() {
            self.surface.notify(EMPTY_CART_NOTICE);
            return;
        }

        match self.api.confirm_order().await {
            Ok(true) => {
                log::info!("Order confirmed with {} lines", cart.len());
                self.surface.notify(ORDER_OK_NOTICE);
                self.clear_cart().await;
            }
            Ok(false) => self.surface.notify(ORDER_FAILED_NOTICE),
            Err(e) => log::error!("Order confirm failed: {}", e),
        }
    }
}
