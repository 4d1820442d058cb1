//! Login Modal Component
//!
//! Inputs live in the page store so closing the modal can reset them.

use leptos::prelude::*;
use view_sync::{Modal, Surface};

use crate::context::use_app;
use crate::store::PageStateStoreFields;

#[component]
pub fn LoginModal() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = store.login_username().get_untracked();
        let password = store.login_password().get_untracked();
        ctx.spawn(move |sync| async move { sync.login(&username, &password).await });
    };

    let switch_to_register = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.with(|sync| {
            sync.surface().close_modal(Modal::Login);
            sync.surface().open_modal(Modal::Register);
        });
    };

    view! {
        <div
            id="loginModal"
            class="modal"
            style:display=move || if store.login_open().get() { "flex" } else { "none" }
        >
            <form class="modal-box" on:submit=submit>
                <button
                    type="button"
                    class="modal-close"
                    on:click=move |_| ctx.with(|sync| sync.surface().close_modal(Modal::Login))
                >
                    "×"
                </button>
                <h2>"Login"</h2>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || store.login_username().get()
                    on:input=move |ev| store.login_username().set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || store.login_password().get()
                    on:input=move |ev| store.login_password().set(event_target_value(&ev))
                />
                <button type="submit">"Login"</button>
                <p class="modal-switch">
                    "New here? "
                    <a href="#" on:click=switch_to_register>"Create an account"</a>
                </p>
            </form>
        </div>
    }
}
