//! Remote services the pipeline depends on.
//!
//! These abstractions let the pipeline be tested with mock data; the live
//! implementations are [`crate::booking::BookingClient`] and
//! [`crate::rates::RateClient`].

use std::future::Future;

use crate::booking::BookingError;
use crate::domain::{ExchangeRate, PriceQuote, SearchResult, SessionToken, Station};
use crate::rates::RateError;

use super::request::{JourneySearch, PriceLookup};

/// The booking API's four remote procedures.
pub trait BookingApi {
    /// Resolve a free-text mask to the best-ranked station.
    ///
    /// Fails with [`BookingError::StationNotFound`] if nothing matches.
    fn find_station(
        &self,
        mask: &str,
    ) -> impl Future<Output = Result<Station, BookingError>> + Send;

    /// Open a fresh booking session.
    fn open_session(&self) -> impl Future<Output = Result<SessionToken, BookingError>> + Send;

    /// Search connections; the result keeps the API's ordering.
    fn search_journeys(
        &self,
        session: &SessionToken,
        search: &JourneySearch<'_>,
    ) -> impl Future<Output = Result<SearchResult, BookingError>> + Send;

    /// Price all connections of a search in one call.
    ///
    /// Returns one quote per requested identifier, in request order.
    fn fetch_prices(
        &self,
        session: &SessionToken,
        lookup: &PriceLookup<'_>,
    ) -> impl Future<Output = Result<Vec<PriceQuote>, BookingError>> + Send;
}

/// Source of the source-per-target exchange rate.
pub trait RateSource {
    /// Fetch the current rate, or `None` if the service has no usable one.
    fn fetch_rate(&self) -> impl Future<Output = Result<Option<ExchangeRate>, RateError>> + Send;
}
