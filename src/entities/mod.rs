mod booking;
mod customer;
mod driver;
mod hotel;
mod itinerary;
mod review;
mod room;
mod trip;

pub use booking::{Booking, BookingDraft, Quote, TAX_RATE};
pub use customer::{Customer, CustomerDraft, CustomerUpdate};
pub use driver::{Driver, DriverDraft, DriverStatus, DriverUpdate, Vehicle};
pub use hotel::{Hotel, HotelUpdate};
pub use itinerary::{HotelStay, Itinerary, ItineraryDraft, ItineraryStatus, ScheduleItem};
pub use review::{average_rating, star_display, Review, ReviewUpdate, StarDisplay};
pub use room::{DayOccupancy, Room, AVAILABILITY_HORIZON_DAYS};
pub use trip::{RideRequest, Trip, TripStatus};

/// Case-insensitive substring check over an optional field. Absent fields
/// never match, they must not fail the search.
pub(crate) fn contains_ci(field: Option<&str>, needle: &str) -> bool {
    match field {
        Some(value) => value.to_lowercase().contains(needle),
        None => false,
    }
}
