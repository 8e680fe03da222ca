//! Domain types for the connection server.
//!
//! These types represent validated booking data, independent of the wire
//! formats used by the booking API and of the JSON shape we serve.

mod connection;
mod line;
mod price;
mod session;
mod station;
mod time;

pub use connection::{Connection, ConnectionId, Leg, PricedConnection, SearchHandle, SearchResult};
pub use line::line_label;
pub use price::{ExchangeRate, InvalidRate, MinorUnits, Price, PriceQuote, round2};
pub use session::SessionToken;
pub use station::{Station, StationId};
pub use time::{TimeError, WireDate};
