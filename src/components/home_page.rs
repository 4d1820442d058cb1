//! Home Page Component

use leptos::prelude::*;
use view_sync::{Modal, Surface};

use crate::context::use_app;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app();

    view! {
        <section class="hero">
            <h1>"Spice Route"</h1>
            <p>"Home-style Indian food, cooked to order."</p>
            <div class="hero-actions">
                <a class="hero-btn" href="/menu">"Explore Menu"</a>
                <button
                    class="hero-btn"
                    on:click=move |_| ctx.with(|sync| sync.surface().open_modal(Modal::Booking))
                >
                    "Book a Table"
                </button>
            </div>
        </section>
    }
}
