use async_trait::async_trait;
use serde::Serialize;

use super::Client;
use crate::api::DriverAPI;
use crate::entities::{RideRequest, Trip};
use crate::error::Error;

#[derive(Serialize)]
struct DriverIdParams {
    #[serde(rename = "driverId")]
    driver_id: i64,
}

#[async_trait]
impl DriverAPI for Client {
    #[tracing::instrument(skip(self))]
    async fn list_ride_requests(&self, driver_id: i64) -> Result<Vec<RideRequest>, Error> {
        let res = self
            .http
            .get(self.url("/driver/rides"))
            .query(&[("driver_id", driver_id)])
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn accept_ride(&self, ride_id: i64, driver_id: i64) -> Result<Trip, Error> {
        let res = self
            .http
            .post(self.url(&format!("/driver/rides/{}/accept", ride_id)))
            .json(&DriverIdParams { driver_id })
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn decline_ride(&self, ride_id: i64, driver_id: i64) -> Result<(), Error> {
        let res = self
            .http
            .post(self.url(&format!("/driver/rides/{}/decline", ride_id)))
            .json(&DriverIdParams { driver_id })
            .send()
            .await?;

        Self::accept(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_trips(&self, driver_id: i64) -> Result<Vec<Trip>, Error> {
        let res = self
            .http
            .get(self.url("/driver/trips"))
            .query(&[("driver_id", driver_id)])
            .send()
            .await?;

        Self::decode(res).await
    }
}
