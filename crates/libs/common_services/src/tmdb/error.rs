use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Why one upstream request produced no usable section.
///
/// The wrapped `reqwest` errors have their URL stripped, request URLs carry the api key.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(reqwest::Error),

    #[error("upstream responded with status {0}")]
    Status(StatusCode),

    #[error("could not read response body: {0}")]
    Body(reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("no response within {0:?}")]
    Timeout(Duration),
}
