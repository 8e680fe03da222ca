//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Leg, PricedConnection, WireDate};
use crate::query::{JourneyQuery, PassengerAge, TravelClass};

/// Message for a request missing any required parameter.
pub const MISSING_PARAMS: &str = "Missing from, to, or dep";

/// Query string of `GET /connections`.
///
/// Everything is optional text here so that missing and non-integer values
/// get specific 400 messages. Query strings that fail to decode at all
/// (duplicated keys, say) become a JSON 400 in the handler.
#[derive(Debug, Default, Deserialize)]
pub struct ConnectionsParams {
    /// Origin station mask
    pub from: Option<String>,

    /// Destination station mask
    pub to: Option<String>,

    /// Departure, epoch milliseconds
    pub dep: Option<String>,

    /// Passenger age (default -1)
    pub age: Option<String>,

    /// Travel class (default 2)
    pub class: Option<String>,
}

/// Why a connections request was rejected before any remote call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing from, to, or dep")]
    Missing,

    #[error("Invalid {param}: {value:?} is not an integer")]
    NotAnInteger { param: &'static str, value: String },

    #[error("Invalid dep: {0} is out of range")]
    DepartureOutOfRange(i64),
}

impl ConnectionsParams {
    /// Validate into a journey query.
    pub fn into_query(self) -> Result<JourneyQuery, ValidationError> {
        let (Some(from), Some(to), Some(dep)) = (
            non_empty(self.from),
            non_empty(self.to),
            non_empty(self.dep),
        ) else {
            return Err(ValidationError::Missing);
        };

        let dep_ms: i64 = parse_int("dep", &dep)?;
        let departure =
            WireDate::from_millis(dep_ms).map_err(|_| ValidationError::DepartureOutOfRange(dep_ms))?;

        let passenger_age = match non_empty(self.age) {
            Some(age) => PassengerAge(parse_int("age", &age)?),
            None => PassengerAge::default(),
        };

        let travel_class = match non_empty(self.class) {
            Some(class) => TravelClass(parse_int("class", &class)?),
            None => TravelClass::default(),
        };

        Ok(JourneyQuery {
            from,
            to,
            departure,
            travel_class,
            passenger_age,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_int<T: std::str::FromStr>(
    param: &'static str,
    value: &str,
) -> Result<T, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotAnInteger {
            param,
            value: value.to_string(),
        })
}

/// A priced connection in the response array.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResult {
    /// Booking API connection id
    pub id: i64,

    /// Price in CZK, 2 dp
    pub price_czk: f64,

    /// Price in EUR, 2 dp
    pub price_eur: f64,

    /// Number of changes
    pub transfers: usize,

    pub legs: Vec<LegResult>,
}

/// One leg of a connection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    /// Departure, ISO-8601 UTC
    pub dep_time: String,

    /// Arrival, ISO-8601 UTC
    pub arr_time: String,

    pub dep_name: String,
    pub dest_name: String,

    /// e.g. "EC 173"
    pub line_name: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ConnectionResult {
    /// Create from a priced domain connection.
    pub fn from_priced(priced: &PricedConnection) -> Self {
        Self {
            id: priced.connection.id.0,
            price_czk: priced.price.source,
            price_eur: priced.price.target,
            transfers: priced.connection.transfers(),
            legs: priced.connection.legs.iter().map(LegResult::from_leg).collect(),
        }
    }
}

impl LegResult {
    /// Create from a domain Leg.
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            dep_time: leg.departure.to_iso8601(),
            arr_time: leg.arrival.to_iso8601(),
            dep_name: leg.from_name.clone(),
            dest_name: leg.to_name.clone(),
            line_name: leg.line_label.clone(),
        }
    }
}
