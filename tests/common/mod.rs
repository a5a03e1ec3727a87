#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use tripdesk::api::{AdminAPI, AuthAPI, CustomerAPI, DriverAPI, DynAPI, HotelAPI, API};
use tripdesk::auth::{AuthContext, Session};
use tripdesk::entities::{
    Booking, BookingDraft, Customer, CustomerDraft, CustomerUpdate, Driver, DriverDraft,
    DriverUpdate, Hotel, HotelUpdate, Itinerary, ItineraryDraft, Review, ReviewUpdate,
    RideRequest, Room, Trip, TripStatus,
};
use tripdesk::error::{not_found_error, rejection_error, Error};

/// In-memory stand-in for the platform API. Mutations hit the held vectors
/// the way the server would; `fail_next_call` scripts a rejected call.
pub struct FakeAPI {
    pub customers: Mutex<Vec<Customer>>,
    pub drivers: Mutex<Vec<Driver>>,
    pub hotels: Mutex<Vec<Hotel>>,
    pub rooms: Mutex<Vec<Room>>,
    pub itineraries: Mutex<Vec<Itinerary>>,
    pub reviews: Mutex<Vec<Review>>,
    pub ride_requests: Mutex<Vec<RideRequest>>,
    pub trips: Mutex<Vec<Trip>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub profile: Mutex<Option<Hotel>>,
    pub transition_calls: Mutex<Vec<(String, i64, i64)>>,
    fail_next: AtomicBool,
    next_id: AtomicI64,
}

impl FakeAPI {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            customers: Mutex::new(Vec::new()),
            drivers: Mutex::new(Vec::new()),
            hotels: Mutex::new(Vec::new()),
            rooms: Mutex::new(Vec::new()),
            itineraries: Mutex::new(Vec::new()),
            reviews: Mutex::new(Vec::new()),
            ride_requests: Mutex::new(Vec::new()),
            trips: Mutex::new(Vec::new()),
            bookings: Mutex::new(Vec::new()),
            profile: Mutex::new(None),
            transition_calls: Mutex::new(Vec::new()),
            fail_next: AtomicBool::new(false),
            next_id: AtomicI64::new(100),
        })
    }

    pub fn fail_next_call(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn gate(&self) -> Result<(), Error> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(rejection_error(Some("scripted failure".into())));
        }

        Ok(())
    }

    fn assign_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthAPI for FakeAPI {
    async fn sign_up(&self, draft: CustomerDraft, _role: &str) -> Result<Customer, Error> {
        self.gate()?;

        let customer = Customer {
            id: self.assign_id(),
            username: draft.username,
            email: draft.email,
            phone: draft.phone,
            name: draft.name,
            address: draft.address,
            dob: draft.dob,
            gender: draft.gender,
        };

        self.customers.lock().unwrap().push(customer.clone());

        Ok(customer)
    }

    async fn sign_in(&self, username: &str, _password: &str) -> Result<Session, Error> {
        self.gate()?;

        Ok(Session {
            user_id: 1,
            name: username.into(),
            email: None,
            roles: vec!["customer".into()],
        })
    }

    async fn sign_out(&self) -> Result<(), Error> {
        self.gate()
    }
}

#[async_trait]
impl AdminAPI for FakeAPI {
    async fn list_customers(&self) -> Result<Vec<Customer>, Error> {
        self.gate()?;

        Ok(self.customers.lock().unwrap().clone())
    }

    async fn update_customer(&self, id: i64, update: CustomerUpdate) -> Result<Customer, Error> {
        self.gate()?;

        let mut customers = self.customers.lock().unwrap();
        let customer = customers
            .iter_mut()
            .find(|customer| customer.id == id)
            .ok_or_else(not_found_error)?;

        if update.email.is_some() {
            customer.email = update.email;
        }
        if update.phone.is_some() {
            customer.phone = update.phone;
        }
        if update.name.is_some() {
            customer.name = update.name;
        }
        if update.address.is_some() {
            customer.address = update.address;
        }
        if update.dob.is_some() {
            customer.dob = update.dob;
        }
        if update.gender.is_some() {
            customer.gender = update.gender;
        }

        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: i64) -> Result<(), Error> {
        self.gate()?;

        self.customers
            .lock()
            .unwrap()
            .retain(|customer| customer.id != id);

        Ok(())
    }

    async fn list_drivers(&self) -> Result<Vec<Driver>, Error> {
        self.gate()?;

        Ok(self.drivers.lock().unwrap().clone())
    }

    async fn create_driver(&self, draft: DriverDraft) -> Result<Driver, Error> {
        self.gate()?;

        let driver = Driver {
            id: self.assign_id(),
            name: draft.name,
            contact: draft.contact,
            vehicle: draft.vehicle,
            status: Default::default(),
        };

        self.drivers.lock().unwrap().push(driver.clone());

        Ok(driver)
    }

    async fn update_driver(&self, id: i64, update: DriverUpdate) -> Result<Driver, Error> {
        self.gate()?;

        let mut drivers = self.drivers.lock().unwrap();
        let driver = drivers
            .iter_mut()
            .find(|driver| driver.id == id)
            .ok_or_else(not_found_error)?;

        if update.name.is_some() {
            driver.name = update.name;
        }
        if update.contact.is_some() {
            driver.contact = update.contact;
        }
        if update.vehicle.is_some() {
            driver.vehicle = update.vehicle;
        }
        if let Some(status) = update.status {
            driver.status = status;
        }

        Ok(driver.clone())
    }

    async fn delete_driver(&self, id: i64) -> Result<(), Error> {
        self.gate()?;

        self.drivers.lock().unwrap().retain(|driver| driver.id != id);

        Ok(())
    }
}

#[async_trait]
impl HotelAPI for FakeAPI {
    async fn find_profile(&self) -> Result<Hotel, Error> {
        self.gate()?;

        self.profile.lock().unwrap().clone().ok_or_else(not_found_error)
    }

    async fn update_profile(&self, update: HotelUpdate) -> Result<Hotel, Error> {
        self.gate()?;

        let mut profile = self.profile.lock().unwrap();
        let hotel = profile.as_mut().ok_or_else(not_found_error)?;

        if let Some(name) = update.name {
            hotel.name = name;
        }
        if update.location.is_some() {
            hotel.location = update.location;
        }
        if update.address.is_some() {
            hotel.address = update.address;
        }
        if update.description.is_some() {
            hotel.description = update.description;
        }

        Ok(hotel.clone())
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, Error> {
        self.gate()?;

        Ok(self.rooms.lock().unwrap().clone())
    }

    async fn update_room_count(&self, id: i64, total_number: u32) -> Result<Room, Error> {
        self.gate()?;

        let mut rooms = self.rooms.lock().unwrap();
        let room = rooms
            .iter_mut()
            .find(|room| room.id == id)
            .ok_or_else(not_found_error)?;

        room.total_number = total_number;

        Ok(room.clone())
    }

    async fn list_hotel_reviews(&self, hotel_id: i64) -> Result<Vec<Review>, Error> {
        self.gate()?;

        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|review| review.hotel_id == hotel_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CustomerAPI for FakeAPI {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, Error> {
        self.gate()?;

        Ok(self.hotels.lock().unwrap().clone())
    }

    async fn find_hotel(&self, id: i64) -> Result<Hotel, Error> {
        self.gate()?;

        self.hotels
            .lock()
            .unwrap()
            .iter()
            .find(|hotel| hotel.id == id)
            .cloned()
            .ok_or_else(not_found_error)
    }

    async fn list_hotel_rooms(&self, hotel_id: i64) -> Result<Vec<Room>, Error> {
        self.gate()?;

        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .filter(|room| room.hotel_id == Some(hotel_id))
            .cloned()
            .collect())
    }

    async fn create_booking(&self, draft: BookingDraft) -> Result<Booking, Error> {
        self.gate()?;

        let booking = Booking {
            id: Some(format!("bk-{}", self.assign_id())),
            room_id: draft.room_id,
            hotel_id: draft.hotel_id,
            check_in: draft.check_in,
            check_out: draft.check_out,
            guests: draft.guests,
            total: draft.total,
        };

        self.bookings.lock().unwrap().push(booking.clone());

        Ok(booking)
    }

    async fn list_itineraries(&self, _user_id: i64) -> Result<Vec<Itinerary>, Error> {
        self.gate()?;

        Ok(self.itineraries.lock().unwrap().clone())
    }

    async fn create_itinerary(&self, draft: ItineraryDraft) -> Result<Itinerary, Error> {
        self.gate()?;

        draft.validate()?;

        let itinerary = Itinerary {
            id: self.assign_id(),
            name: draft.name,
            travelers: draft.travelers,
            start_date: draft.start_date.ok_or_else(not_found_error)?,
            end_date: draft.end_date.ok_or_else(not_found_error)?,
            destinations: draft.destinations,
            stays: draft.stays,
            schedule: draft.schedule,
        };

        self.itineraries.lock().unwrap().push(itinerary.clone());

        Ok(itinerary)
    }

    async fn update_itinerary(&self, id: i64, draft: ItineraryDraft) -> Result<Itinerary, Error> {
        self.gate()?;

        draft.validate()?;

        let mut itineraries = self.itineraries.lock().unwrap();
        let itinerary = itineraries
            .iter_mut()
            .find(|itinerary| itinerary.id == id)
            .ok_or_else(not_found_error)?;

        itinerary.name = draft.name;
        itinerary.travelers = draft.travelers;
        if let Some(start_date) = draft.start_date {
            itinerary.start_date = start_date;
        }
        if let Some(end_date) = draft.end_date {
            itinerary.end_date = end_date;
        }
        itinerary.destinations = draft.destinations;
        itinerary.stays = draft.stays;
        itinerary.schedule = draft.schedule;

        Ok(itinerary.clone())
    }

    async fn delete_itinerary(&self, id: i64) -> Result<(), Error> {
        self.gate()?;

        self.itineraries
            .lock()
            .unwrap()
            .retain(|itinerary| itinerary.id != id);

        Ok(())
    }

    async fn list_reviews(&self, user_id: i64) -> Result<Vec<Review>, Error> {
        self.gate()?;

        Ok(self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|review| review.author_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_review(&self, id: i64, update: ReviewUpdate) -> Result<Review, Error> {
        self.gate()?;

        update.validate()?;

        let mut reviews = self.reviews.lock().unwrap();
        let review = reviews
            .iter_mut()
            .find(|review| review.id == id)
            .ok_or_else(not_found_error)?;

        if let Some(rating) = update.rating {
            review.rating = rating;
        }
        if update.comment.is_some() {
            review.comment = update.comment;
        }

        Ok(review.clone())
    }

    async fn delete_review(&self, id: i64) -> Result<(), Error> {
        self.gate()?;

        self.reviews.lock().unwrap().retain(|review| review.id != id);

        Ok(())
    }
}

#[async_trait]
impl DriverAPI for FakeAPI {
    async fn list_ride_requests(&self, _driver_id: i64) -> Result<Vec<RideRequest>, Error> {
        self.gate()?;

        Ok(self.ride_requests.lock().unwrap().clone())
    }

    async fn accept_ride(&self, ride_id: i64, driver_id: i64) -> Result<Trip, Error> {
        self.gate()?;

        self.transition_calls
            .lock()
            .unwrap()
            .push(("accept".into(), ride_id, driver_id));

        let mut requests = self.ride_requests.lock().unwrap();
        let position = requests
            .iter()
            .position(|request| request.numeric_id().ok() == Some(ride_id))
            .ok_or_else(not_found_error)?;
        let request = requests.remove(position);

        let trip = Trip {
            id: ride_id,
            status: TripStatus::Confirmed,
            passenger_name: request.passenger_name,
            pickup: request.pickup,
            dropoff: request.dropoff,
            fare: request.fare,
            driver_id: Some(driver_id),
        };

        self.trips.lock().unwrap().push(trip.clone());

        Ok(trip)
    }

    async fn decline_ride(&self, ride_id: i64, driver_id: i64) -> Result<(), Error> {
        self.gate()?;

        self.transition_calls
            .lock()
            .unwrap()
            .push(("decline".into(), ride_id, driver_id));

        self.ride_requests
            .lock()
            .unwrap()
            .retain(|request| request.numeric_id().ok() != Some(ride_id));

        Ok(())
    }

    async fn list_trips(&self, driver_id: i64) -> Result<Vec<Trip>, Error> {
        self.gate()?;

        Ok(self
            .trips
            .lock()
            .unwrap()
            .iter()
            .filter(|trip| trip.driver_id == Some(driver_id))
            .cloned()
            .collect())
    }
}

impl API for FakeAPI {}

pub fn api(fake: &Arc<FakeAPI>) -> DynAPI {
    fake.clone() as DynAPI
}

pub fn signed_in(user_id: i64, role: &str) -> AuthContext {
    let mut context = AuthContext::new();

    context.establish(Session {
        user_id,
        name: "Test User".into(),
        email: None,
        roles: vec![role.into()],
    });

    context
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn customer(id: i64, username: &str, name: Option<&str>) -> Customer {
    Customer {
        id,
        username: username.into(),
        email: None,
        phone: None,
        name: name.map(|n| n.into()),
        address: None,
        dob: None,
        gender: None,
    }
}

pub fn ride(id: &str, passenger: &str) -> RideRequest {
    RideRequest {
        id: id.into(),
        passenger_name: Some(passenger.into()),
        pickup: Some("Airport".into()),
        dropoff: Some("Harbor".into()),
        fare: Some(18.5),
    }
}

pub fn review(id: i64, hotel_id: i64, author_id: i64, rating: u8) -> Review {
    Review {
        id,
        rating,
        comment: None,
        date: date(2023, 8, 1),
        hotel_id,
        hotel_name: None,
        author_id,
    }
}

pub fn room(id: i64, hotel_id: i64, day_prices: Vec<i64>) -> Room {
    Room {
        id,
        hotel_id: Some(hotel_id),
        kind: "deluxe".into(),
        capacity: 2,
        total_number: 10,
        day_prices,
        days: Vec::new(),
    }
}

pub fn hotel(id: i64, name: &str) -> Hotel {
    Hotel {
        id,
        name: name.into(),
        location: Some("Lisbon".into()),
        address: None,
        description: None,
        rating: None,
    }
}
