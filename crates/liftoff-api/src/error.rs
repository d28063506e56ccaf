//! Launch API error types.

use thiserror::Error;

/// Errors that can occur when talking to the launches endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport or body-decode error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body (possibly truncated).
        message: String,
    },

    /// The configured base URL could not be parsed or extended.
    #[error("invalid base URL: {0}")]
    BaseUrl(String),
}
