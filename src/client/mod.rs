mod admin_api;
mod auth_api;
mod customer_api;
mod driver_api;
mod hotel_api;

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::api::API;
use crate::config::Config;
use crate::error::{
    not_found_error, rejection_error, unauthorized_error, upstream_error, Error,
};

/// HTTP client bound to the platform's base URL. One shared connection pool
/// and cookie store carry the session across every call; the request
/// timeout is applied here, once, for all operations.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, Error> {
        let res = Self::check(res).await?;

        res.json().await.map_err(crate::error::decode_error)
    }

    async fn accept(res: Response) -> Result<(), Error> {
        Self::check(res).await.map(|_| ())
    }

    async fn check(res: Response) -> Result<Response, Error> {
        let status = res.status().as_u16();

        match status {
            200..=299 => Ok(res),
            401 | 403 => Err(unauthorized_error()),
            404 => Err(not_found_error()),
            400..=499 => Err(rejection_error(Self::detail(res).await)),
            _ => Err(upstream_error()),
        }
    }

    /// Validation failures carry a human-readable detail in the body under
    /// one of a few conventional keys.
    async fn detail(res: Response) -> Option<String> {
        let body: serde_json::Value = res.json().await.ok()?;

        ["detail", "error", "message"]
            .iter()
            .find_map(|key| body.get(key))
            .and_then(|value| value.as_str())
            .map(|detail| detail.to_string())
    }
}

impl API for Client {}
