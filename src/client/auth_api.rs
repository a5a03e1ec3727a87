use async_trait::async_trait;
use serde::Serialize;

use super::Client;
use crate::api::AuthAPI;
use crate::auth::Session;
use crate::entities::{Customer, CustomerDraft};
use crate::error::Error;

#[derive(Serialize)]
struct SignUpParams<'a> {
    #[serde(flatten)]
    draft: &'a CustomerDraft,
    role: &'a str,
}

#[derive(Serialize)]
struct SignInParams<'a> {
    username: &'a str,
    password: &'a str,
}

#[async_trait]
impl AuthAPI for Client {
    #[tracing::instrument(skip(self, draft))]
    async fn sign_up(&self, draft: CustomerDraft, role: &str) -> Result<Customer, Error> {
        let res = self
            .http
            .post(self.url("/auth/signup"))
            .json(&SignUpParams {
                draft: &draft,
                role,
            })
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self, password))]
    async fn sign_in(&self, username: &str, password: &str) -> Result<Session, Error> {
        let res = self
            .http
            .post(self.url("/auth/signin"))
            .json(&SignInParams { username, password })
            .send()
            .await?;

        Self::decode(res).await
    }

    #[tracing::instrument(skip(self))]
    async fn sign_out(&self) -> Result<(), Error> {
        let res = self.http.post(self.url("/auth/signout")).send().await?;

        Self::accept(res).await
    }
}
