//! Timestamps in the booking API's embedded-epoch format.
//!
//! The booking API encodes instants as `/Date(<milliseconds>)/`, where the
//! milliseconds count from the Unix epoch in UTC. Responses sometimes append
//! a `+hhmm` or `-hhmm` zone hint inside the parentheses
//! (`/Date(1700000000000+0100)/`); the hint does not move the instant, so it
//! is validated and then ignored.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid wire timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// An instant as exchanged with the booking API.
///
/// # Examples
///
/// ```
/// use connection_server::domain::WireDate;
///
/// let date = WireDate::parse("/Date(1700000000000)/").unwrap();
/// assert_eq!(date.to_iso8601(), "2023-11-14T22:13:20.000Z");
/// assert_eq!(date.to_string(), "/Date(1700000000000)/");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireDate(DateTime<Utc>);

impl WireDate {
    /// Create from milliseconds since the Unix epoch.
    pub fn from_millis(millis: i64) -> Result<Self, TimeError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| TimeError::new("milliseconds out of range"))
    }

    /// Parse the `/Date(<milliseconds>[±hhmm])/` literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use connection_server::domain::WireDate;
    ///
    /// assert!(WireDate::parse("/Date(0)/").is_ok());
    /// assert!(WireDate::parse("/Date(1700000000000+0100)/").is_ok());
    /// assert!(WireDate::parse("/Date(-86400000)/").is_ok());
    ///
    /// assert!(WireDate::parse("1700000000000").is_err());
    /// assert!(WireDate::parse("/Date(abc)/").is_err());
    /// assert!(WireDate::parse("/Date(1700000000000+01)/").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let inner = s
            .trim()
            .strip_prefix("/Date(")
            .and_then(|rest| rest.strip_suffix(")/"))
            .ok_or_else(|| TimeError::new("expected /Date(<milliseconds>)/"))?;

        // A leading '-' belongs to the milliseconds, so the zone hint can only
        // start after the first character.
        let millis = match inner
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '+' || c == '-')
        {
            Some((idx, _)) => {
                let hint = &inner[idx + 1..];
                if hint.len() != 4 || !hint.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(TimeError::new("zone hint must be +hhmm or -hhmm"));
                }
                &inner[..idx]
            }
            None => inner,
        };

        let millis: i64 = millis
            .parse()
            .map_err(|_| TimeError::new("milliseconds are not an integer"))?;

        Self::from_millis(millis)
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// The instant as a chrono `DateTime`.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// ISO-8601 in UTC with millisecond precision, e.g. `2023-11-14T22:13:20.000Z`.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Display for WireDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/Date({})/", self.timestamp_millis())
    }
}

impl fmt::Debug for WireDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WireDate({})", self.to_iso8601())
    }
}

impl Serialize for WireDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WireDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        WireDate::parse(&s).map_err(serde::de::Error::custom)
    }
}
