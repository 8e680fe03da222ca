//! Server configuration.
//!
//! Everything comes from environment variables with defaults, so the
//! server runs with no configuration at all:
//!
//! | Variable               | Default                              |
//! |------------------------|--------------------------------------|
//! | `BIND_ADDR`            | `0.0.0.0`                            |
//! | `PORT`                 | `3000`                               |
//! | `STATIC_DIR`           | `public`                             |
//! | `BOOKING_BASE_URL`     | [`crate::booking::DEFAULT_BASE_URL`] |
//! | `BOOKING_LANG`         | `en`                                 |
//! | `BOOKING_CLIENT_ID`    | `connection-server`                  |
//! | `BOOKING_USER_AGENT`   | `connection-server/<version>`        |
//! | `BOOKING_TIMEOUT_SECS` | `30`                                 |
//! | `RATES_BASE_URL`       | `https://api.frankfurter.app`        |
//! | `RATES_TIMEOUT_SECS`   | `30`                                 |

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::booking::BookingConfig;
use crate::rates::RatesConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";

/// Error for an environment variable that is set but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {key}: {value:?}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory served for any path the API does not handle.
    pub static_dir: PathBuf,
    pub booking: BookingConfig,
    pub rates: RatesConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, treating `None` and empty
    /// values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut booking = BookingConfig::new();
        if let Some(url) = get("BOOKING_BASE_URL") {
            booking = booking.with_base_url(url);
        }
        if let Some(lang) = get("BOOKING_LANG") {
            booking = booking.with_lang(lang);
        }
        if let Some(client_id) = get("BOOKING_CLIENT_ID") {
            let version = booking.client_version.clone();
            booking = booking.with_client(client_id, version);
        }
        if let Some(user_agent) = get("BOOKING_USER_AGENT") {
            booking = booking.with_user_agent(user_agent);
        }
        if let Some(secs) = parse_var(&get, "BOOKING_TIMEOUT_SECS")? {
            booking = booking.with_timeout(secs);
        }

        let mut rates = RatesConfig::new();
        if let Some(url) = get("RATES_BASE_URL") {
            rates = rates.with_base_url(url);
        }
        if let Some(secs) = parse_var(&get, "RATES_TIMEOUT_SECS")? {
            rates = rates.with_timeout(secs);
        }

        Ok(Self {
            bind_addr: parse_var(&get, "BIND_ADDR")?.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            port: parse_var(&get, "PORT")?.unwrap_or(DEFAULT_PORT),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            booking,
            rates,
        })
    }

    /// The socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_var<T, G>(get: &G, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|value| {
            value.trim().parse().map_err(|_| ConfigError {
                key,
                value: value.clone(),
            })
        })
        .transpose()
}
