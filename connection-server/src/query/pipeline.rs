//! The journey query pipeline.
//!
//! For one query:
//!
//! ```text
//! find_station(from) ─┐
//!                     ├─> open_session ─> search_journeys ─> fetch_prices ─┐
//! find_station(to) ───┘                                                    ├─> pair_prices
//! fetch_rate ──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two station lookups are joined fail-fast, and so is the rate lookup
//! against the booking chain. The first error aborts the query; dropping
//! the pipeline future cancels whatever is still in flight.

use futures::future::try_join;
use tracing::{debug, warn};

use crate::domain::{ExchangeRate, PriceQuote, PricedConnection, SearchResult};

use super::assemble::pair_prices;
use super::error::QueryError;
use super::provider::{BookingApi, RateSource};
use super::request::{JourneyQuery, JourneySearch, PriceLookup};

/// Runs journey queries against a booking API and a rate source.
pub struct Pipeline<'a, B, R> {
    booking: &'a B,
    rates: &'a R,
}

impl<'a, B, R> Pipeline<'a, B, R>
where
    B: BookingApi + Sync,
    R: RateSource + Sync,
{
    pub fn new(booking: &'a B, rates: &'a R) -> Self {
        Self { booking, rates }
    }

    /// Run a query, returning priced connections in booking API order.
    pub async fn run(&self, query: &JourneyQuery) -> Result<Vec<PricedConnection>, QueryError> {
        let (rate, (search, quotes)) =
            try_join(self.exchange_rate(), self.search_and_price(query)).await?;

        debug!(
            connections = search.connections.len(),
            rate = rate.value(),
            "assembling priced connections"
        );

        Ok(pair_prices(search, quotes, rate)?)
    }

    /// Current rate, or parity if the rate service has nothing usable.
    async fn exchange_rate(&self) -> Result<ExchangeRate, QueryError> {
        match self.rates.fetch_rate().await? {
            Some(rate) => Ok(rate),
            None => {
                warn!("no usable exchange rate, falling back to {}", ExchangeRate::PARITY);
                Ok(ExchangeRate::PARITY)
            }
        }
    }

    /// Resolve stations, open a session, search, then price the results.
    async fn search_and_price(
        &self,
        query: &JourneyQuery,
    ) -> Result<(SearchResult, Vec<PriceQuote>), QueryError> {
        let (origin, destination) = try_join(
            self.booking.find_station(&query.from),
            self.booking.find_station(&query.to),
        )
        .await?;
        debug!(%origin, %destination, "stations resolved");

        let session = self.booking.open_session().await?;

        let search = JourneySearch {
            origin: &origin,
            destination: &destination,
            departure: query.departure,
            travel_class: query.travel_class,
            passenger_age: query.passenger_age,
        };
        let result = self.booking.search_journeys(&session, &search).await?;
        debug!(
            handle = result.handle.0,
            connections = result.connections.len(),
            "journeys found"
        );

        let connection_ids = result.connection_ids();
        let lookup = PriceLookup {
            handle: result.handle,
            connection_ids: &connection_ids,
            travel_class: query.travel_class,
            passenger_age: query.passenger_age,
        };
        let quotes = self.booking.fetch_prices(&session, &lookup).await?;

        Ok((result, quotes))
    }
}
