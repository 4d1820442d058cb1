//! Navigation Bar Component
//!
//! Site links, the cart badge (on pages that have one) and account buttons.

use leptos::prelude::*;
use view_sync::{Modal, Surface};

use crate::context::use_app;
use crate::store::PageStateStoreFields;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let open = move |modal: Modal| ctx.with(|sync| sync.surface().open_modal(modal));

    view! {
        <nav class="navbar">
            <a class="logo" href="/">"Spice Route"</a>
            <div class="nav-links">
                <a href="/">"Home"</a>
                <a href="/menu">"Menu"</a>
                <a href="/cart" class="cart-link">
                    "Cart"
                    {ctx.page.has_cart_badge().then(|| view! {
                        <span id="cartCount" class="cart-count">{move || store.cart_count().get()}</span>
                    })}
                </a>
                <button class="nav-btn" on:click=move |_| open(Modal::Login)>"Login"</button>
                <button class="nav-btn" on:click=move |_| open(Modal::Register)>"Register"</button>
            </div>
        </nav>
    }
}
