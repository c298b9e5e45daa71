//! Error types for the Lokalise API client.
//!
//! [`LokaliseError`] separates error responses from the API (classified by
//! status range, the way Lokalise documents them) from transport failures
//! and bodies that could not be decoded.

use std::borrow::Borrow;

use thiserror::Error;

/// Errors that can occur while talking to the Lokalise API.
#[derive(Debug, Error)]
pub enum LokaliseError {
    /// Non-2xx response. `message` comes from the `error.message` field of the
    /// body, or `Unknown error` when the body carries none.
    #[error("{}: {status} - {message}", status_class(.status))]
    Api { status: u16, message: String },

    /// A 2xx status other than the 200 the endpoint answers with.
    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),

    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(reqwest::Error),

    /// Underlying network failure (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

fn status_class(status: impl Borrow<u16>) -> &'static str {
    match *status.borrow() {
        400..=499 => "Client error",
        500..=599 => "Server error",
        _ => "Unexpected error",
    }
}
