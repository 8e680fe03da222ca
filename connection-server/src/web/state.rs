//! Application state for the web layer.

use std::sync::Arc;

use crate::booking::BookingClient;
use crate::rates::RateClient;

/// Shared application state.
///
/// Generic over the booking API and rate source so handlers can be
/// exercised with mocks; the server itself uses [`LiveState`].
pub struct AppState<B, R> {
    /// Booking API client
    pub booking: Arc<B>,

    /// Exchange-rate client
    pub rates: Arc<R>,
}

/// State backed by the real HTTP clients.
pub type LiveState = AppState<BookingClient, RateClient>;

impl<B, R> AppState<B, R> {
    /// Create a new app state.
    pub fn new(booking: B, rates: R) -> Self {
        Self {
            booking: Arc::new(booking),
            rates: Arc::new(rates),
        }
    }
}

// Manual impl: a derive would require `B: Clone` and `R: Clone`.
impl<B, R> Clone for AppState<B, R> {
    fn clone(&self) -> Self {
        Self {
            booking: Arc::clone(&self.booking),
            rates: Arc::clone(&self.rates),
        }
    }
}
