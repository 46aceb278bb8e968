use dotenv::dotenv;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::info;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Service settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_timeout: Duration,
    pub server_addr: SocketAddr,
    pub sentry_dsn: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            server_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_SERVER_PORT)),
            sentry_dsn: None,
        }
    }
}

impl AppConfig {
    /// Load settings from the process environment, after reading `.env` if present
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from any key lookup; missing keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("BOOKING_API_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let timeout_secs = match lookup("BOOKING_API_TIMEOUT_SECS") {
            Some(value) => parse_value("BOOKING_API_TIMEOUT_SECS", &value)?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                name: "BOOKING_API_TIMEOUT_SECS",
                value: "0".to_string(),
                reason: "timeout must be at least one second".to_string(),
            });
        }

        let host: IpAddr = parse_value(
            "SERVER_HOST",
            &lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
        )?;
        let port: u16 = match lookup("SERVER_PORT") {
            Some(value) => parse_value("SERVER_PORT", &value)?,
            None => DEFAULT_SERVER_PORT,
        };

        let sentry_dsn = lookup("SENTRY_DSN").filter(|value| !value.is_empty());

        info!("Booking backend at {} (timeout {}s)", api_base_url, timeout_secs);

        Ok(Self {
            api_base_url,
            api_timeout: Duration::from_secs(timeout_secs),
            server_addr: SocketAddr::new(host, port),
            sentry_dsn,
        })
    }
}

fn parse_value<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
