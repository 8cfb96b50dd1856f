//! Failure taxonomy for REST calls.
//!
//! Not-found is a distinct variant so detail pages can render a dedicated
//! message instead of an indefinite loading state. Nothing here is fatal:
//! callers map every variant to a toast or inline text and the view keeps
//! its prior (or empty) data.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Error raised by the `net::api` helpers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The entity does not exist (HTTP 404).
    #[error("not found")]
    NotFound,
    /// Any other non-success HTTP status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// Transport-level failure before a status was received.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected wire shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status to the matching variant.
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            Self::NotFound
        } else {
            Self::Status(status)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
