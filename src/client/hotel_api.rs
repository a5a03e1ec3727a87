use async_trait::async_trait;
use serde::Serialize;

use super::Client;
use crate::api::HotelAPI;
use crate::entities::{Hotel, HotelUpdate, Review, Room};
use crate::error::Error;

#[derive(Serialize)]
struct RoomCountPatch {
    #[serde(rename = "totalNumber")]
    total_number: u32,
}

#[async_trait]
impl HotelAPI for Client {
    #[tracing::instrument(skip(self))]
    async fn find_profile(&self) -> Result<Hotel, Error> {
        let res = self.http.get(self.url("/hotel/profile")).send().await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_profile(&self, update: HotelUpdate) -> Result<Hotel, Error> {
        let res = self
            .http
            .put(self.url("/hotel/profile"))
            .json(&update)
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_rooms(&self) -> Result<Vec<Room>, Error> {
        let res = self.http.get(self.url("/hotel/hotelRoom")).send().await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn update_room_count(&self, id: i64, total_number: u32) -> Result<Room, Error> {
        let res = self
            .http
            .patch(self.url(&format!("/hotel/rooms/{}", id)))
            .json(&RoomCountPatch { total_number })
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_hotel_reviews(&self, hotel_id: i64) -> Result<Vec<Review>, Error> {
        let res = self
            .http
            .get(self.url("/hotel/hotel-reviews"))
            .query(&[("hotel_id", hotel_id)])
            .send()
            .await?;

        Self::decode(res).await
    }
}
