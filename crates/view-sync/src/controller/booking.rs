//! Table booking

use super::ViewSync;
use crate::model::BookingRequest;
use crate::surface::{Modal, Surface};
use crate::transport::Transport;

const BOOKED: &str = "Table booked successfully!";
const BOOKING_FAILED: &str = "Booking failed. Please try again.";
const BAD_GUESTS: &str = "Please enter number of guests";
const SERVER_ERROR: &str = "Server error. Please try later.";

/// Raw booking form fields as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
}

impl BookingForm {
    /// `None` when the guest count is not a positive integer
    pub fn to_request(&self) -> Option<BookingRequest> {
        let guests: u32 = self.guests.trim().parse().ok().filter(|g| *g > 0)?;
        Some(BookingRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            guests,
        })
    }
}

impl<T: Transport, S: Surface> ViewSync<T, S> {
    pub async fn book_table(&self, form: &BookingForm) {
        let Some(request) = form.to_request() else {
            self.surface.notify(BAD_GUESTS);
            return;
        };

        match self.api.book_table(&request).await {
            Ok(reply) if reply.is_success() => {
                self.surface.notify(BOOKED);
                self.surface.close_modal(Modal::Booking);
                self.surface.reset_booking_form();
            }
            Ok(_) => self.surface.notify(BOOKING_FAILED),
            Err(e) => {
                log::error!("Booking error: {}", e);
                self.surface.notify(SERVER_ERROR);
            }
        }
    }
}
