//! Error types for fetching and configuration.
//!
//! HTML extraction itself never fails: a missing element degrades the
//! affected field to `None` instead of producing an error.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, timeout, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("could not load {url}: status {status}")]
    Status { url: String, status: StatusCode },
    /// Settings could not be assembled from defaults, file and environment.
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    /// A JSON payload did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
