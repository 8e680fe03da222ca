//! Mock booking API and rate source for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::booking::{BookingError, ConversionError};
use crate::domain::{
    Connection, ConnectionId, ExchangeRate, Leg, MinorUnits, PriceQuote, SearchHandle,
    SearchResult, SessionToken, Station, WireDate,
};
use crate::rates::RateError;

use super::provider::{BookingApi, RateSource};
use super::request::{JourneySearch, PriceLookup};

/// Which booking call should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Session,
    MissingSession,
    Search,
    MalformedSearch,
    Prices,
}

/// Recorded booking calls, in the order they were made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FindStation(String),
    OpenSession,
    SearchJourneys {
        token: String,
        origin: i64,
        destination: i64,
        departure_ms: i64,
        travel_class: i32,
        passenger_age: i32,
    },
    FetchPrices {
        token: String,
        handle: i64,
        ids: Vec<i64>,
        travel_class: i32,
        passenger_age: i32,
    },
}

pub struct MockBooking {
    stations: HashMap<String, Station>,
    connections: Vec<Connection>,
    prices: Vec<PriceQuote>,
    fail_at: Option<FailAt>,
    calls: Mutex<Vec<Call>>,
}

impl MockBooking {
    pub fn new() -> Self {
        Self {
            stations: HashMap::new(),
            connections: Vec::new(),
            prices: Vec::new(),
            fail_at: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_station(mut self, mask: &str, id: i64, name: &str) -> Self {
        self.stations
            .insert(mask.to_string(), Station::new(id, name));
        self
    }

    pub fn with_connections(mut self, connections: Vec<Connection>) -> Self {
        self.connections = connections;
        self
    }

    /// Prices returned without echoed identifiers.
    pub fn with_prices(mut self, prices: &[i64]) -> Self {
        self.prices = prices
            .iter()
            .map(|&p| PriceQuote {
                connection_id: None,
                amount: MinorUnits(p),
            })
            .collect();
        self
    }

    pub fn with_quotes(mut self, quotes: Vec<PriceQuote>) -> Self {
        self.prices = quotes;
        self
    }

    pub fn failing_at(mut self, stage: FailAt) -> Self {
        self.fail_at = Some(stage);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn api_error() -> BookingError {
        BookingError::Api {
            status: 502,
            message: "upstream unavailable".to_string(),
        }
    }
}

impl BookingApi for MockBooking {
    async fn find_station(&self, mask: &str) -> Result<Station, BookingError> {
        self.record(Call::FindStation(mask.to_string()));
        self.stations
            .get(mask)
            .cloned()
            .ok_or_else(|| BookingError::StationNotFound {
                mask: mask.to_string(),
            })
    }

    async fn open_session(&self) -> Result<SessionToken, BookingError> {
        self.record(Call::OpenSession);
        match self.fail_at {
            Some(FailAt::Session) => Err(Self::api_error()),
            Some(FailAt::MissingSession) => Err(BookingError::MissingSession),
            _ => Ok(SessionToken::new("mock-session").unwrap()),
        }
    }

    async fn search_journeys(
        &self,
        session: &SessionToken,
        search: &JourneySearch<'_>,
    ) -> Result<SearchResult, BookingError> {
        self.record(Call::SearchJourneys {
            token: session.as_str().to_string(),
            origin: search.origin.id.0,
            destination: search.destination.id.0,
            departure_ms: search.departure.timestamp_millis(),
            travel_class: search.travel_class.0,
            passenger_age: search.passenger_age.0,
        });
        match self.fail_at {
            Some(FailAt::Search) => Err(Self::api_error()),
            Some(FailAt::MalformedSearch) => Err(ConversionError::MissingResult.into()),
            _ => Ok(SearchResult {
                handle: SearchHandle(4411),
                connections: self.connections.clone(),
            }),
        }
    }

    async fn fetch_prices(
        &self,
        session: &SessionToken,
        lookup: &PriceLookup<'_>,
    ) -> Result<Vec<PriceQuote>, BookingError> {
        self.record(Call::FetchPrices {
            token: session.as_str().to_string(),
            handle: lookup.handle.0,
            ids: lookup.connection_ids.iter().map(|id| id.0).collect(),
            travel_class: lookup.travel_class.0,
            passenger_age: lookup.passenger_age.0,
        });
        match self.fail_at {
            Some(FailAt::Prices) => Err(Self::api_error()),
            _ => Ok(self.prices.clone()),
        }
    }
}

/// Rate source returning a fixed answer.
pub struct MockRates {
    rate: Option<f64>,
    fail: bool,
    calls: Mutex<usize>,
}

impl MockRates {
    pub fn new(rate: f64) -> Self {
        Self {
            rate: Some(rate),
            fail: false,
            calls: Mutex::new(0),
        }
    }

    /// A rate service whose response has no usable rate.
    pub fn missing() -> Self {
        Self {
            rate: None,
            fail: false,
            calls: Mutex::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            rate: None,
            fail: true,
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl RateSource for MockRates {
    async fn fetch_rate(&self) -> Result<Option<ExchangeRate>, RateError> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(RateError::Api {
                status: 503,
                message: "rates down".to_string(),
            });
        }
        Ok(self.rate.and_then(|r| ExchangeRate::new(r).ok()))
    }
}

pub fn time(millis: i64) -> WireDate {
    WireDate::from_millis(millis).unwrap()
}

pub fn leg(dep: i64, arr: i64, from: &str, to: &str, line: &str) -> Leg {
    Leg {
        departure: time(dep),
        arrival: time(arr),
        from_name: from.to_string(),
        to_name: to.to_string(),
        line_label: line.to_string(),
    }
}

pub fn connection(id: i64, legs: Vec<Leg>) -> Connection {
    Connection {
        id: ConnectionId(id),
        legs,
    }
}

/// Three Praha → Brno connections: direct, one change, direct.
pub fn praha_brno_connections() -> Vec<Connection> {
    let t0 = 1_700_000_000_000;
    let hour = 3_600_000;
    vec![
        connection(
            101,
            vec![leg(t0, t0 + 2 * hour, "Praha hl.n.", "Brno hl.n.", "EC 173")],
        ),
        connection(
            205,
            vec![
                leg(t0 + hour, t0 + 2 * hour, "Praha hl.n.", "Pardubice hl.n.", "R 981"),
                leg(t0 + 2 * hour + 600_000, t0 + 4 * hour, "Pardubice hl.n.", "Brno hl.n.", "Os 5011 S 4"),
            ],
        ),
        connection(
            87,
            vec![leg(t0 + 3 * hour, t0 + 5 * hour, "Praha hl.n.", "Brno hl.n.", "RJ 1011")],
        ),
    ]
}

/// Booking mock that resolves "Praha" and "Brno" and returns
/// [`praha_brno_connections`] priced at 249, 199.50 and 321.45 CZK.
pub fn praha_brno_booking() -> MockBooking {
    MockBooking::new()
        .with_station("Praha", 5_457_076, "Praha hl.n.")
        .with_station("Brno", 5_435_216, "Brno hl.n.")
        .with_connections(praha_brno_connections())
        .with_prices(&[24900, 19950, 32145])
}
