//! Train connection server.
//!
//! A thin proxy over a railway booking API: resolve two station names,
//! search connections, price them, convert the prices to a second currency
//! and serve the result as a flat JSON list.

pub mod booking;
pub mod config;
pub mod domain;
pub mod query;
pub mod rates;
pub mod web;

#[cfg(test)]
pub(crate) mod local_server;
