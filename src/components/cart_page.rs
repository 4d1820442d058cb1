//! Cart Page Component

use leptos::prelude::*;
use view_sync::{format_amount, price_label};

use crate::context::use_app;
use crate::store::PageStateStoreFields;

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    view! {
        <section class="cart-page">
            <h1>"Your Cart"</h1>
            <div id="cartItems" class="cart-items">
                {move || store.cart().read().lines.iter().map(|line| {
                    let label = format!("Item {} × {}", line.key.as_str(), line.qty);
                    let subtotal = price_label(line.subtotal);
                    view! {
                        <div class="cart-item">
                            <span>{label}</span>
                            <span>{subtotal}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="cart-summary">
                "Total: ₹"
                <span id="cartTotal">{move || format_amount(store.cart().read().total)}</span>
            </div>
            <div class="cart-actions">
                <button
                    class="confirm-btn"
                    on:click=move |_| ctx.spawn(|sync| async move { sync.confirm_order().await })
                >
                    "Confirm Order"
                </button>
                <button
                    class="clear-btn"
                    on:click=move |_| ctx.spawn(|sync| async move { sync.clear_cart().await })
                >
                    "Clear Cart"
                </button>
            </div>
        </section>
    }
}
