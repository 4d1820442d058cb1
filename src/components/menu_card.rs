//! Menu Card Component
//!
//! One menu or search item with its add-to-cart button.

use leptos::prelude::*;
use view_sync::Card;

use crate::context::use_app;

#[component]
pub fn MenuCard(card: Card) -> impl IntoView {
    let ctx = use_app();
    let item_id = card.item_id;
    let price = card.price;

    let add = move |_| ctx.spawn(move |sync| async move { sync.add_to_cart(item_id, price).await });

    view! {
        <div class="menu-card">
            <img src=card.image_url alt=card.image_alt />
            <h3>{card.title}</h3>
            <p>{card.description}</p>
            <span>{card.price_label}</span>
            <button class="cart-btn" on:click=add>"Add to Cart"</button>
        </div>
    }
}
