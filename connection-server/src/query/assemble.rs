//! Pairing prices with connections.
//!
//! The price lookup answers with one quote per identifier in the order the
//! identifiers were sent, and the identifiers were taken from the search
//! result in its own order. Pairing is therefore positional, but it is made
//! explicit here and checked: the counts must agree, and where the booking
//! API echoes a connection id with a quote it must be the id at that
//! position.

use crate::domain::{ExchangeRate, Price, PriceQuote, PricedConnection, SearchResult};

use super::error::AssemblyError;

/// Attach a converted price to each connection, keeping search order.
pub fn pair_prices(
    search: SearchResult,
    quotes: Vec<PriceQuote>,
    rate: ExchangeRate,
) -> Result<Vec<PricedConnection>, AssemblyError> {
    if quotes.len() != search.connections.len() {
        return Err(AssemblyError::CountMismatch {
            connections: search.connections.len(),
            prices: quotes.len(),
        });
    }

    search
        .connections
        .into_iter()
        .zip(quotes)
        .enumerate()
        .map(|(position, (connection, quote))| {
            if let Some(quoted) = quote.connection_id
                && quoted != connection.id
            {
                return Err(AssemblyError::IdMismatch {
                    position,
                    expected: connection.id,
                    quoted,
                });
            }

            Ok(PricedConnection {
                price: Price::convert(quote.amount, rate),
                connection,
            })
        })
        .collect()
}
