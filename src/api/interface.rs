use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::Session;
use crate::entities::{
    Booking, BookingDraft, Customer, CustomerDraft, CustomerUpdate, Driver, DriverDraft,
    DriverUpdate, Hotel, HotelUpdate, Itinerary, ItineraryDraft, Review, ReviewUpdate,
    RideRequest, Room, Trip,
};
use crate::error::Error;

/// One typed intent per operation, one HTTP request per intent. No retries,
/// no response re-shaping beyond decode; callers interpret failures.
#[async_trait]
pub trait AuthAPI {
    async fn sign_up(&self, draft: CustomerDraft, role: &str) -> Result<Customer, Error>;
    async fn sign_in(&self, username: &str, password: &str) -> Result<Session, Error>;
    async fn sign_out(&self) -> Result<(), Error>;
}

#[async_trait]
pub trait AdminAPI {
    async fn list_customers(&self) -> Result<Vec<Customer>, Error>;
    async fn update_customer(&self, id: i64, update: CustomerUpdate) -> Result<Customer, Error>;
    async fn delete_customer(&self, id: i64) -> Result<(), Error>;

    async fn list_drivers(&self) -> Result<Vec<Driver>, Error>;
    async fn create_driver(&self, draft: DriverDraft) -> Result<Driver, Error>;
    async fn update_driver(&self, id: i64, update: DriverUpdate) -> Result<Driver, Error>;
    async fn delete_driver(&self, id: i64) -> Result<(), Error>;
}

#[async_trait]
pub trait HotelAPI {
    async fn find_profile(&self) -> Result<Hotel, Error>;
    async fn update_profile(&self, update: HotelUpdate) -> Result<Hotel, Error>;
    async fn list_rooms(&self) -> Result<Vec<Room>, Error>;
    async fn update_room_count(&self, id: i64, total_number: u32) -> Result<Room, Error>;
    async fn list_hotel_reviews(&self, hotel_id: i64) -> Result<Vec<Review>, Error>;
}

#[async_trait]
pub trait CustomerAPI {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, Error>;
    async fn find_hotel(&self, id: i64) -> Result<Hotel, Error>;
    async fn list_hotel_rooms(&self, hotel_id: i64) -> Result<Vec<Room>, Error>;
    async fn create_booking(&self, draft: BookingDraft) -> Result<Booking, Error>;

    async fn list_itineraries(&self, user_id: i64) -> Result<Vec<Itinerary>, Error>;
    async fn create_itinerary(&self, draft: ItineraryDraft) -> Result<Itinerary, Error>;
    async fn update_itinerary(&self, id: i64, draft: ItineraryDraft) -> Result<Itinerary, Error>;
    async fn delete_itinerary(&self, id: i64) -> Result<(), Error>;

    async fn list_reviews(&self, user_id: i64) -> Result<Vec<Review>, Error>;
    async fn update_review(&self, id: i64, update: ReviewUpdate) -> Result<Review, Error>;
    async fn delete_review(&self, id: i64) -> Result<(), Error>;
}

#[async_trait]
pub trait DriverAPI {
    async fn list_ride_requests(&self, driver_id: i64) -> Result<Vec<RideRequest>, Error>;
    async fn accept_ride(&self, ride_id: i64, driver_id: i64) -> Result<Trip, Error>;
    async fn decline_ride(&self, ride_id: i64, driver_id: i64) -> Result<(), Error>;
    async fn list_trips(&self, driver_id: i64) -> Result<Vec<Trip>, Error>;
}

pub trait API: AuthAPI + AdminAPI + HotelAPI + CustomerAPI + DriverAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
