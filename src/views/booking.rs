use chrono::NaiveDate;

use crate::api::{CustomerAPI, DynAPI};
use crate::entities::{Booking, BookingDraft, Quote, Room};
use crate::error::{invalid_input_error, Error};
use crate::external::payment::{DynGateway, PaymentGateway};
use crate::notify::Notifier;
use crate::views::Scope;

/// Booking form for one room: date range, live quote, payment through the
/// external gateway, then the booking itself.
pub struct BookingForm {
    api: DynAPI,
    gateway: DynGateway,
    notices: Notifier,
    scope: Scope,
    room: Room,
    hotel_id: i64,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    guests: u32,
    submitting: bool,
    confirmation: Option<Booking>,
}

impl BookingForm {
    pub fn new(
        api: DynAPI,
        gateway: DynGateway,
        notices: Notifier,
        room: Room,
        hotel_id: i64,
    ) -> Self {
        Self {
            api,
            gateway,
            notices,
            scope: Scope::new(),
            room,
            hotel_id,
            check_in: None,
            check_out: None,
            guests: 1,
            submitting: false,
            confirmation: None,
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn set_dates(&mut self, check_in: NaiveDate, check_out: NaiveDate) {
        self.check_in = Some(check_in);
        self.check_out = Some(check_out);
    }

    pub fn set_guests(&mut self, guests: u32) {
        self.guests = guests;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn confirmation(&self) -> Option<&Booking> {
        self.confirmation.as_ref()
    }

    /// Recomputed from the held dates whenever the form re-renders.
    pub fn quote(&self, today: NaiveDate) -> Result<Quote, Error> {
        let (check_in, check_out) = match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => (check_in, check_out),
            _ => return Err(invalid_input_error()),
        };

        Quote::build(&self.room, today, check_in, check_out)
    }

    #[tracing::instrument(skip(self))]
    pub async fn submit(&mut self, today: NaiveDate) {
        let quote = match self.quote(today) {
            Ok(quote) => quote,
            Err(err) => {
                self.notices
                    .failure(format!("cannot price this stay: {}", err.message));
                return;
            }
        };

        // quote() succeeded, so both dates are present
        let (check_in, check_out) = (self.check_in.unwrap(), self.check_out.unwrap());

        self.submitting = true;
        let handle = self.notices.pending("processing payment");

        let reference = format!("room-{}-{}", self.room.id, check_in);
        let charge = self.scope.run(self.gateway.charge(&reference, quote.total));

        if let Err(err) = charge.await {
            self.submitting = false;
            handle.failed(format!("payment failed: {}", err.message));
            return;
        }

        let draft = BookingDraft {
            room_id: self.room.id,
            hotel_id: self.hotel_id,
            check_in,
            check_out,
            guests: self.guests,
            total: quote.total,
        };

        let result = self.scope.run(self.api.create_booking(draft)).await;
        self.submitting = false;

        match result {
            Ok(booking) => {
                self.confirmation = Some(booking);
                handle.succeeded("booking confirmed");
            }
            Err(err) => handle.failed(format!("booking failed: {}", err.message)),
        }
    }
}
