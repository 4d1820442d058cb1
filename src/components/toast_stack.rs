//! Toast Stack Component

use leptos::prelude::*;

use crate::context::use_app;
use crate::store::PageStateStoreFields;

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app().store;

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    // Looked up live so the `show` class can transition
                    let class = move || {
                        let shown = store.toasts().read().iter().any(|t| t.id == id && t.shown);
                        if shown { "toast show" } else { "toast" }
                    };
                    view! { <div class=class>{toast.message}</div> }
                }
            />
        </div>
    }
}
