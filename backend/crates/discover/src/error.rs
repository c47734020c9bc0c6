//! Discover Error Types
//!
//! Failures of the outbound event search. None of them reach the client as
//! an error status: the page renders with an empty list instead.

use kernel::error::kind::ErrorKind;
use thiserror::Error;

/// Discover-specific result type alias
pub type DiscoverResult<T> = Result<T, DiscoverError>;

/// Discover-specific error variants
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// Transport failure (DNS, connect, TLS, timeout, body read)
    #[error("Event API request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Upstream answered with a non-2xx status
    #[error("Event API returned status {0}")]
    Status(u16),

    /// Body was not the expected JSON
    #[error("Event API response is malformed: {0}")]
    Malformed(String),

    /// Body parsed but carried no `_embedded.events`
    #[error("Event API response has no events")]
    MissingEvents,

    /// HTTP client could not be built
    #[error("Event API client setup failed: {0}")]
    ClientSetup(String),
}

impl From<reqwest::Error> for DiscoverError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL carries the API key in its query string
        DiscoverError::Request(e.without_url())
    }
}

impl DiscoverError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DiscoverError::Request(e) if e.is_timeout() || e.is_connect() => {
                ErrorKind::ServiceUnavailable
            }
            DiscoverError::ClientSetup(_) => ErrorKind::InternalServerError,
            _ => ErrorKind::BadGateway,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            DiscoverError::ClientSetup(msg) => {
                tracing::error!(message = %msg, "Event API client setup failed");
            }
            DiscoverError::Status(status) => {
                tracing::warn!(status = *status, "Event API returned an error status");
            }
            _ => {
                tracing::warn!(error = %self, kind = %self.kind(), "Event lookup failed");
            }
        }
    }
}
