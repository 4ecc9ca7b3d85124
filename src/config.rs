//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).
//!
//! | Variable                        | Default         |
//! |---------------------------------|-----------------|
//! | `HOST`                          | `0.0.0.0`       |
//! | `PORT`                          | `8000`          |
//! | `DATABASE_URL`                  | unset           |
//! | `DATABASE_NAME`                 | `event_booking` |
//! | `DATABASE_CONNECT_TIMEOUT_SECS` | `5`             |
//! | `LOG_FORMAT`                    | `text`          |

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;

/// Database name used when `DATABASE_NAME` is unset.
pub const DEFAULT_DATABASE_NAME: &str = "event_booking";

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// MongoDB connection string. `None` leaves storage unavailable.
    pub database_url: Option<String>,

    /// Database holding the `event` and `booking` collections.
    pub database_name: String,

    /// Timeout in seconds for the startup connectivity check.
    pub database_connect_timeout_secs: u64,

    /// Log output format.
    pub log_format: LogFormat,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `PORT` is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `PORT` is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host: IpAddr = match get("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("HOST is not an IP address: {raw}"))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port: u16 = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {raw}"))?,
            None => DEFAULT_PORT,
        };

        let database_url = get("DATABASE_URL");
        let database_name =
            get("DATABASE_NAME").unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());
        let database_connect_timeout_secs = parse_or(get("DATABASE_CONNECT_TIMEOUT_SECS"), 5);

        let log_format = match get("LOG_FORMAT").as_deref().map(str::trim) {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr: SocketAddr::new(host, port),
            database_url,
            database_name,
            database_connect_timeout_secs,
            log_format,
        })
    }
}

/// Parses `value` as `T`, returning `default` on missing or invalid values.
fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}
