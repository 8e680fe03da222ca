//! Booking API client.
//!
//! This module provides an HTTP client for the railway booking API that
//! the connection server fronts. Four remote procedures are used, in this
//! order for each request:
//!
//! - station search: free-text mask → ranked station matches
//! - session creation: a fresh token per request, never reused
//! - journey search: stations, departure and passenger → handle and
//!   ordered connections
//! - price lookup: one batched call for all connections of a search
//!
//! Timestamps travel in the API's `/Date(<milliseconds>)/` format.

mod client;
mod convert;
mod error;
mod types;

pub use client::{BookingClient, BookingConfig, DEFAULT_BASE_URL};
pub use convert::ConversionError;
pub use error::BookingError;
pub use types::NotificationPrefs;
