//! Connections returned by a journey search.

use std::fmt;

use super::{Price, WireDate};

/// Booking API connection identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub i64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle scoping price lookups to the search that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchHandle(pub i64);

/// One directly-connected travel segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub departure: WireDate,
    pub arrival: WireDate,
    pub from_name: String,
    pub to_name: String,
    /// Space-joined line tokens, see [`super::line_label`].
    pub line_label: String,
}

/// A candidate connection: one or more legs in travel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub id: ConnectionId,
    pub legs: Vec<Leg>,
}

impl Connection {
    /// Number of changes between trains.
    ///
    /// A connection with `k` legs has `k - 1` transfers; a connection with a
    /// single leg (or, degenerately, none) has zero.
    pub fn transfers(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }
}

/// Result of a journey search.
///
/// Connection order is the booking API's order and is significant: it is
/// the order in which identifiers are sent for pricing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub handle: SearchHandle,
    pub connections: Vec<Connection>,
}

impl SearchResult {
    /// Connection identifiers in result order.
    pub fn connection_ids(&self) -> Vec<ConnectionId> {
        self.connections.iter().map(|c| c.id).collect()
    }
}

/// A connection together with the price quoted for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedConnection {
    pub connection: Connection,
    pub price: Price,
}
