//! Register Modal Component

use leptos::prelude::*;
use view_sync::{Modal, Surface};

use crate::context::use_app;
use crate::store::PageStateStoreFields;

#[component]
pub fn RegisterModal() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get_untracked();
        let password = password.get_untracked();
        ctx.spawn(move |sync| async move { sync.register(&username, &password).await });
    };

    view! {
        <div
            id="registerModal"
            class=move || if store.register_open().get() { "modal active" } else { "modal" }
        >
            <form class="modal-box" on:submit=submit>
                <button
                    type="button"
                    class="modal-close"
                    on:click=move |_| ctx.with(|sync| sync.surface().close_modal(Modal::Register))
                >
                    "×"
                </button>
                <h2>"Create Account"</h2>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit">"Register"</button>
            </form>
        </div>
    }
}
