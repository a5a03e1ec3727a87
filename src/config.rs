use std::env;
use std::time::Duration;

use crate::error::Error;

const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, read once at startup. A hung request must fail
/// visibly, so the timeout always has a value.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_base: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let api_base = env::var("TRIPDESK_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.into())
            .trim_end_matches('/')
            .to_string();

        let request_timeout = match env::var("TRIPDESK_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse()
                    .map_err(|_| crate::error::invalid_input_error())?,
            ),
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_base,
            request_timeout,
        })
    }
}
