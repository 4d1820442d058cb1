//! Admin Menu Page Component
//!
//! New-dish form. The form itself posts to the server; the frontend only
//! fills the description from the AI helper.

use leptos::prelude::*;
use view_sync::Category;

use crate::context::use_app;
use crate::store::PageStateStoreFields;

const ADD_ITEM_ACTION: &str = "/admin/menu/add";

#[component]
pub fn AdminMenuPage() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    let (food_name, set_food_name) = signal(String::new());

    let generate = move |_| {
        let name = food_name.get_untracked();
        ctx.spawn(move |sync| async move { sync.suggest_description(&name).await });
    };

    view! {
        <section class="admin-menu">
            <h1>"Add Menu Item"</h1>
            <form class="admin-form" method="post" action=ADD_ITEM_ACTION>
                <input
                    id="aiFoodName"
                    name="name"
                    type="text"
                    placeholder="Dish name"
                    required=true
                    prop:value=move || food_name.get()
                    on:input=move |ev| set_food_name.set(event_target_value(&ev))
                />
                <button type="button" class="ai-btn" on:click=generate>"Generate description"</button>
                <textarea
                    id="descInput"
                    name="description"
                    placeholder="Short description"
                    prop:value=move || store.description_suggestion().get()
                    on:input=move |ev| store.description_suggestion().set(event_target_value(&ev))
                ></textarea>
                <input name="price" type="number" step="0.01" placeholder="Price" required=true />
                <input name="image" type="text" placeholder="Image filename" required=true />
                <select name="category">
                    {Category::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.key()>{c.label()}</option> })
                        .collect_view()}
                </select>
                <button type="submit">"Add Item"</button>
            </form>
        </section>
    }
}
