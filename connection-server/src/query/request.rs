//! Journey query parameters.

use crate::domain::{ConnectionId, SearchHandle, Station, WireDate};

/// Travel class as the booking API numbers it (1 = first, 2 = second).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelClass(pub i32);

impl Default for TravelClass {
    fn default() -> Self {
        TravelClass(2)
    }
}

/// Passenger age as sent to the booking API.
///
/// `-1` is passed through verbatim when no age is given; the booking API
/// applies its own adult default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerAge(pub i32);

impl PassengerAge {
    pub const UNSPECIFIED: PassengerAge = PassengerAge(-1);
}

impl Default for PassengerAge {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

/// A validated request for priced connections between two station masks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyQuery {
    /// Free-text origin mask
    pub from: String,
    /// Free-text destination mask
    pub to: String,
    pub departure: WireDate,
    pub travel_class: TravelClass,
    pub passenger_age: PassengerAge,
}

/// Journey search parameters once both stations are resolved.
#[derive(Debug, Clone, Copy)]
pub struct JourneySearch<'a> {
    pub origin: &'a Station,
    pub destination: &'a Station,
    pub departure: WireDate,
    pub travel_class: TravelClass,
    pub passenger_age: PassengerAge,
}

/// A batched price lookup for the connections of one search.
#[derive(Debug, Clone, Copy)]
pub struct PriceLookup<'a> {
    pub handle: SearchHandle,
    /// Identifiers in search-result order.
    pub connection_ids: &'a [ConnectionId],
    pub travel_class: TravelClass,
    pub passenger_age: PassengerAge,
}
