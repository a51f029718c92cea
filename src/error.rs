// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors are stored in UI state and carried inside messages, so every
//! variant is `Clone` and keeps its source as a rendered string.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Transport-level failure (connection refused, DNS, TLS, reset...).
    #[error("Network Error: {0}")]
    Network(String),

    /// The backend answered with a non-success status code.
    #[error("HTTP Error: {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// The response body could not be decoded into the expected records.
    #[error("Malformed Payload: {0}")]
    MalformedPayload(String),

    /// The configured backend URL cannot be used to build request URLs.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the i18n message key describing this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Network(_) => "error-network",
            Error::HttpStatus { .. } => "error-http-status",
            Error::MalformedPayload(_) => "error-malformed-payload",
            Error::InvalidUrl(_) => "error-invalid-url",
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
        }
    }
}

/// Bodies are decoded with `serde_json`, so every reqwest failure without a
/// status (including a body cut off mid-transfer) is a transport failure.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match (err.status(), err.url()) {
            (Some(status), Some(url)) => Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            },
            _ => Error::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedPayload(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
