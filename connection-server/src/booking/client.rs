//! Booking API HTTP client.
//!
//! Every call is a JSON `POST` to `{base_url}/{method}` carrying the
//! configured client identification. Status handling is shared: any
//! non-success status becomes [`BookingError::Api`] with the response body.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{PriceQuote, SearchResult, SessionToken, Station};
use crate::query::{BookingApi, JourneySearch, PriceLookup};

use super::convert::{convert_prices, convert_search_response, first_station};
use super::error::BookingError;
use super::types::{
    ClientInfo, CreateSessionRequest, CreateSessionResponse, JourneySearchRequest,
    JourneySearchResponse, NotificationPrefs, PassengerDto, PriceRequestDto, PriceResponse,
    StationRef, StationSearchRequest, StationSearchResponse,
};

/// Default base URL for the booking API.
pub const DEFAULT_BASE_URL: &str = "https://booking.rail.example/api/v1";

/// Default number of station matches to ask for. Only the first is used.
const DEFAULT_MAX_STATIONS: u8 = 10;

/// Longest response body excerpt kept in JSON errors.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the booking client.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Language code for station names
    pub lang: String,
    /// Sent as the `User-Agent` header
    pub user_agent: String,
    /// Client identification fields sent in every body
    pub client_id: String,
    pub client_version: String,
    /// Notification preferences for new sessions
    pub notifications: NotificationPrefs,
    /// How many station matches to request
    pub max_stations: u8,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BookingConfig {
    /// Create a config with default client identification.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lang: "en".to_string(),
            user_agent: concat!("connection-server/", env!("CARGO_PKG_VERSION")).to_string(),
            client_id: "connection-server".to_string(),
            client_version: env!("CARGO_PKG_VERSION").to_string(),
            notifications: NotificationPrefs::default(),
            max_stations: DEFAULT_MAX_STATIONS,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the language used for station names.
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Set the client identification.
    pub fn with_client(
        mut self,
        client_id: impl Into<String>,
        client_version: impl Into<String>,
    ) -> Self {
        self.client_id = client_id.into();
        self.client_version = client_version.into();
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Booking API client.
///
/// Cheap to clone and holds no per-request state, so the two station
/// lookups of a request can run concurrently on the same client.
#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    config: BookingConfig,
}

impl BookingClient {
    /// Create a new booking client with the given configuration.
    pub fn new(config: BookingConfig) -> Result<Self, BookingError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| BookingError::Config("invalid user agent".to_string()))?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    fn client_info(&self) -> ClientInfo<'_> {
        ClientInfo {
            client_id: &self.config.client_id,
            client_version: &self.config.client_version,
        }
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), method)
    }

    /// POST a JSON body and decode the JSON response.
    async fn post<Req, Resp>(&self, method: &str, body: &Req) -> Result<Resp, BookingError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = self.url(method);
        debug!(%url, "booking API call");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BookingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| BookingError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })
    }
}

impl BookingApi for BookingClient {
    async fn find_station(&self, mask: &str) -> Result<Station, BookingError> {
        let request = StationSearchRequest {
            lang: &self.config.lang,
            mask,
            max_count: self.config.max_stations,
            client: self.client_info(),
        };

        let response: StationSearchResponse = self.post("stations/search", &request).await?;

        first_station(response.stations).ok_or_else(|| BookingError::StationNotFound {
            mask: mask.to_string(),
        })
    }

    async fn open_session(&self) -> Result<SessionToken, BookingError> {
        let request = CreateSessionRequest {
            client: self.client_info(),
            notifications: self.config.notifications,
        };

        let response: CreateSessionResponse = self.post("sessions", &request).await?;

        response
            .token
            .and_then(SessionToken::new)
            .ok_or(BookingError::MissingSession)
    }

    async fn search_journeys(
        &self,
        session: &SessionToken,
        search: &JourneySearch<'_>,
    ) -> Result<SearchResult, BookingError> {
        let request = JourneySearchRequest {
            token: session.as_str(),
            from: StationRef {
                id: search.origin.id.0,
                name: &search.origin.name,
            },
            to: StationRef {
                id: search.destination.id.0,
                name: &search.destination.name,
            },
            departure: search.departure,
            travel_class: search.travel_class.0,
            passengers: [PassengerDto {
                age: search.passenger_age.0,
                count: 1,
            }],
            client: self.client_info(),
        };

        let response: JourneySearchResponse = self.post("journeys/search", &request).await?;

        Ok(convert_search_response(response)?)
    }

    async fn fetch_prices(
        &self,
        session: &SessionToken,
        lookup: &PriceLookup<'_>,
    ) -> Result<Vec<PriceQuote>, BookingError> {
        if lookup.connection_ids.is_empty() {
            return Ok(Vec::new());
        }

        let request = PriceRequestDto {
            token: session.as_str(),
            handle: lookup.handle.0,
            connection_ids: lookup.connection_ids.iter().map(|id| id.0).collect(),
            travel_class: lookup.travel_class.0,
            passengers: [PassengerDto {
                age: lookup.passenger_age.0,
                count: 1,
            }],
            client: self.client_info(),
        };

        let response: PriceResponse = self.post("prices", &request).await?;

        Ok(convert_prices(response.prices))
    }
}
