//! Exchange-rate HTTP client.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::domain::ExchangeRate;
use crate::query::RateSource;

use super::error::RateError;

/// Default base URL for the exchange-rate service.
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// Response from `GET /latest?from=EUR&to=CZK`.
///
/// Only `rates` is read; the service also sends `amount`, `base` and `date`.
/// It is kept as raw JSON so that an odd shape means "no rate" rather than
/// a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatesResponse {
    #[serde(default)]
    pub rates: serde_json::Value,
}

/// Extract a usable rate for `currency`.
///
/// Returns `None` unless `rates.<currency>` is a finite positive number.
pub fn rate_for(response: &RatesResponse, currency: &str) -> Option<ExchangeRate> {
    let rate = response.rates.get(currency)?.as_f64()?;
    ExchangeRate::new(rate).ok()
}

/// Configuration for the exchange-rate client.
#[derive(Debug, Clone)]
pub struct RatesConfig {
    /// Base URL for the service
    pub base_url: String,
    /// Currency prices are quoted in by the booking API
    pub source_currency: String,
    /// Currency prices are converted into
    pub target_currency: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RatesConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            source_currency: "CZK".to_string(),
            target_currency: "EUR".to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the public exchange-rate service.
#[derive(Debug, Clone)]
pub struct RateClient {
    http: reqwest::Client,
    config: RatesConfig,
}

impl RateClient {
    pub fn new(config: RatesConfig) -> Result<Self, RateError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Fetch the raw rate response.
    pub async fn fetch_latest(&self) -> Result<RatesResponse, RateError> {
        let url = format!("{}/latest", self.config.base_url.trim_end_matches('/'));
        debug!(%url, "exchange rate lookup");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("from", self.config.target_currency.as_str()),
                ("to", self.config.source_currency.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RateError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| RateError::Json {
            message: e.to_string(),
        })
    }
}

impl RateSource for RateClient {
    async fn fetch_rate(&self) -> Result<Option<ExchangeRate>, RateError> {
        let response = self.fetch_latest().await?;
        Ok(rate_for(&response, &self.config.source_currency))
    }
}
