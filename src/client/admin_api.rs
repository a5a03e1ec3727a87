use async_trait::async_trait;

use super::Client;
use crate::api::AdminAPI;
use crate::entities::{Customer, CustomerUpdate, Driver, DriverDraft, DriverUpdate};
use crate::error::Error;

#[async_trait]
impl AdminAPI for Client {
    #[tracing::instrument(skip(self))]
    async fn list_customers(&self) -> Result<Vec<Customer>, Error> {
        let res = self.http.get(self.url("/admin/customers")).send().await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_customer(&self, id: i64, update: CustomerUpdate) -> Result<Customer, Error> {
        let res = self
            .http
            .put(self.url(&format!("/admin/customers/{}", id)))
            .json(&update)
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_customer(&self, id: i64) -> Result<(), Error> {
        let res = self
            .http
            .delete(self.url(&format!("/admin/customers/{}", id)))
            .send()
            .await?;

        Self::accept(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn list_drivers(&self) -> Result<Vec<Driver>, Error> {
        let res = self.http.get(self.url("/admin/drivers")).send().await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self, draft))]
    async fn create_driver(&self, draft: DriverDraft) -> Result<Driver, Error> {
        let res = self
            .http
            .post(self.url("/admin/drivers"))
            .json(&draft)
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_driver(&self, id: i64, update: DriverUpdate) -> Result<Driver, Error> {
        let res = self
            .http
            .put(self.url(&format!("/admin/drivers/{}", id)))
            .json(&update)
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_driver(&self, id: i64) -> Result<(), Error> {
        let res = self
            .http
            .delete(self.url(&format!("/admin/drivers/{}", id)))
            .send()
            .await?;

        Self::accept(res).await
    }
}
