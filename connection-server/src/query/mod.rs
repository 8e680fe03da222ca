//! Journey query orchestration.
//!
//! This module answers one question per request: which connections run
//! between two free-text station names after a given time, and what do
//! they cost in both currencies?
//!
//! It sequences the booking API calls, runs the independent ones
//! concurrently and pairs the prices it gets back with the connections they
//! belong to.

mod assemble;
mod error;
mod pipeline;
mod provider;
mod request;

#[cfg(test)]
pub(crate) mod mock;

pub use assemble::pair_prices;
pub use error::{AssemblyError, QueryError};
pub use pipeline::Pipeline;
pub use provider::{BookingApi, RateSource};
pub use request::{JourneyQuery, JourneySearch, PassengerAge, PriceLookup, TravelClass};
