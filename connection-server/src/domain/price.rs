//! Prices and currency conversion.
//!
//! The booking API quotes prices as integer minor units (hellers for CZK).
//! We present them in major units of the source currency and of the target
//! currency, each rounded to two decimal places.

use std::fmt;

use super::ConnectionId;

/// An amount in minor currency units (1/100 of the major unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinorUnits(pub i64);

impl MinorUnits {
    /// The amount in major units, unrounded.
    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Error returned for an exchange rate that cannot be divided by.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid exchange rate {0}: must be finite and positive")]
pub struct InvalidRate(pub f64);

/// Source-currency units per one target-currency unit (e.g. CZK per EUR).
///
/// Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    /// Rate used when the rate service has nothing usable: prices are shown
    /// unconverted in both currencies.
    pub const PARITY: ExchangeRate = ExchangeRate(1.0);

    /// Create a rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use connection_server::domain::ExchangeRate;
    ///
    /// assert!(ExchangeRate::new(25.0).is_ok());
    /// assert!(ExchangeRate::new(0.0).is_err());
    /// assert!(ExchangeRate::new(-3.0).is_err());
    /// assert!(ExchangeRate::new(f64::NAN).is_err());
    /// ```
    pub fn new(rate: f64) -> Result<Self, InvalidRate> {
        if rate.is_finite() && rate > 0.0 {
            Ok(Self(rate))
        } else {
            Err(InvalidRate(rate))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A price quoted by the booking API for one connection.
///
/// Some deployments echo the connection id with each quote; when present it
/// is used to check the quote lines up with the connection it is paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub connection_id: Option<ConnectionId>,
    pub amount: MinorUnits,
}

/// A price in both currencies, each rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price {
    /// Amount in the source currency (CZK).
    pub source: f64,
    /// Amount in the target currency (EUR).
    pub target: f64,
}

impl Price {
    /// Convert a minor-unit amount.
    ///
    /// Both amounts are rounded independently from the unrounded major-unit
    /// value; the target amount is never derived from the rounded source.
    ///
    /// # Examples
    ///
    /// ```
    /// use connection_server::domain::{ExchangeRate, MinorUnits, Price};
    ///
    /// let price = Price::convert(MinorUnits(12345), ExchangeRate::new(25.0).unwrap());
    /// assert_eq!(price.source, 123.45);
    /// assert_eq!(price.target, 4.94);
    /// ```
    pub fn convert(amount: MinorUnits, rate: ExchangeRate) -> Self {
        let major = amount.to_major();
        Self {
            source: round2(major),
            target: round2(major / rate.value()),
        }
    }
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
