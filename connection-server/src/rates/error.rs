//! Exchange-rate client error types.

/// Errors from the exchange-rate service.
///
/// A response that simply lacks a usable rate is not an error; see
/// [`super::RateClient`].
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned an error status
    #[error("exchange rate API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
