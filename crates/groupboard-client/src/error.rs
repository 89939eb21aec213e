//! Error types for the API gateway.

use thiserror::Error;

/// Errors that can occur while talking to the remote API.
///
/// Failures are always explicit: a non-2xx status or a body that does not
/// match the expected shape surfaces here rather than as a silently empty
/// result. No retries are attempted at this layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL or a joined endpoint path was invalid.
    #[error("Invalid API URL: {0}")]
    BadUrl(#[from] url::ParseError),

    /// The endpoint did not respond (DNS, connect, timeout, TLS).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint responded with a non-success status.
    #[error("API returned {status} for {endpoint}")]
    Status {
        /// The endpoint path that was requested.
        endpoint: &'static str,
        /// The HTTP status code received.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("Malformed response from {endpoint}: {source}")]
    Malformed {
        /// The endpoint path that was requested.
        endpoint: &'static str,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for API gateway operations.
pub type Result<T> = std::result::Result<T, ClientError>;
