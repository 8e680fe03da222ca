//! Exchange-rate lookup.
//!
//! Fetches how many source-currency units (CZK) buy one target-currency
//! unit (EUR) from a public rate service, fresh for every request.

mod client;
mod error;

pub use client::{RateClient, RatesConfig, RatesResponse, rate_for};
pub use error::RateError;
