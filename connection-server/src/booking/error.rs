//! Booking client error types.

use super::convert::ConversionError;

/// Errors from the booking API client.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("booking API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Station search returned no matches
    #[error("no station found for \"{mask}\"")]
    StationNotFound { mask: String },

    /// Session creation succeeded but carried no token
    #[error("booking API returned no session token")]
    MissingSession,

    /// Journey search response lacked the expected result envelope
    #[error("malformed journey search response: {0}")]
    Malformed(#[from] ConversionError),

    /// Client could not be configured
    #[error("invalid booking client configuration: {0}")]
    Config(String),
}
