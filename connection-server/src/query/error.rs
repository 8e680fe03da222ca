//! Pipeline error type.

use crate::booking::BookingError;
use crate::domain::ConnectionId;
use crate::rates::RateError;

/// Prices that cannot be lined up with the connections they belong to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    #[error("price count {prices} does not match connection count {connections}")]
    CountMismatch { connections: usize, prices: usize },

    #[error("price at position {position} is for connection {quoted}, expected {expected}")]
    IdMismatch {
        position: usize,
        expected: ConnectionId,
        quoted: ConnectionId,
    },
}

/// Error from running a journey query.
///
/// Any stage failure aborts the whole query; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Rates(#[from] RateError),

    #[error("internal consistency error: {0}")]
    Inconsistent(#[from] AssemblyError),
}
