//! HTTP clients for the two remote services: the forecast provider and the
//! chat assistant. Both use a blocking `reqwest` client.

pub mod chat;
pub mod weather_api;

use crate::errors::{AppError, AppResult};
use std::time::Duration;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn http_client() -> AppResult<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("plantlog/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

/// Turn a non-2xx response into `AppError::Api`, keeping the body for debugging.
pub(crate) fn check_status(
    response: reqwest::blocking::Response,
) -> AppResult<reqwest::blocking::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(AppError::Api {
        status: status.as_u16(),
        body,
    })
}
