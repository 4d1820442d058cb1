//! Booking Modal Component
//!
//! Table booking form. Field values live in the page store so a successful
//! booking can reset them.

use leptos::prelude::*;
use view_sync::{BookingForm, Modal, Surface};

use crate::context::use_app;
use crate::store::PageStateStoreFields;

/// Accessor for one form field
type FieldFn = fn(&mut BookingForm) -> &mut String;

#[component]
pub fn BookingModal() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = store.booking_form().get_untracked();
        ctx.spawn(move |sync| async move { sync.book_table(&form).await });
    };

    view! {
        <div
            id="bookingModal"
            class=move || if store.booking_open().get() { "modal active" } else { "modal" }
        >
            <form id="bookingForm" class="modal-box" on:submit=submit>
                <button
                    type="button"
                    class="modal-close"
                    on:click=move |_| ctx.with(|sync| sync.surface().close_modal(Modal::Booking))
                >
                    "×"
                </button>
                <h2>"Book a Table"</h2>
                <BookingField input_type="text" placeholder="Name" field=name_field />
                <BookingField input_type="tel" placeholder="Phone" field=phone_field />
                <BookingField input_type="date" placeholder="Date" field=date_field />
                <BookingField input_type="time" placeholder="Time" field=time_field />
                <BookingField input_type="number" placeholder="Guests" field=guests_field />
                <button type="submit">"Confirm Booking"</button>
            </form>
        </div>
    }
}

fn name_field(form: &mut BookingForm) -> &mut String {
    &mut form.name
}

fn phone_field(form: &mut BookingForm) -> &mut String {
    &mut form.phone
}

fn date_field(form: &mut BookingForm) -> &mut String {
    &mut form.date
}

fn time_field(form: &mut BookingForm) -> &mut String {
    &mut form.time
}

fn guests_field(form: &mut BookingForm) -> &mut String {
    &mut form.guests
}

#[component]
fn BookingField(input_type: &'static str, placeholder: &'static str, field: FieldFn) -> impl IntoView {
    let store = use_app().store;

    view! {
        <input
            type=input_type
            placeholder=placeholder
            required=true
            prop:value=move || {
                let mut form = store.booking_form().get();
                field(&mut form).clone()
            }
            on:input=move |ev| {
                *field(&mut store.booking_form().write()) = event_target_value(&ev);
            }
        />
    }
}
