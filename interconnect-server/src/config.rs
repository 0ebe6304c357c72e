//! Process configuration from environment variables.
//!
//! | Variable                   | Default                            |
//! |----------------------------|------------------------------------|
//! | `BIND_ADDR`                | `127.0.0.1:8080`                   |
//! | `ROUTES_API_URL`           | `https://services-api.ryanair.com` |
//! | `SCHEDULES_API_URL`        | `https://services-api.ryanair.com` |
//! | `UPSTREAM_TIMEOUT_SECS`    | `30`                               |
//! | `UPSTREAM_MAX_CONCURRENT`  | `10`                               |
//! | `MIN_LAYOVER_MINUTES`      | `120`                              |
//! | `ROUTE_OPERATOR`           | `RYANAIR`                          |
//! | `ROUTES_CACHE_TTL_SECS`    | `3600`                             |
//! | `SCHEDULES_CACHE_TTL_SECS` | `600`                              |

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::planner::{DEFAULT_OPERATOR, SearchConfig};
use crate::routes::RoutesClientConfig;
use crate::schedules::SchedulesClientConfig;

/// Longest minimum layover accepted: one year.
pub const MAX_MIN_LAYOVER_MINUTES: i64 = 366 * 24 * 60;

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// A variable is set to something out of range
    #[error("{name} must be {constraint}")]
    OutOfRange {
        name: &'static str,
        constraint: &'static str,
    },
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub routes_api_url: String,
    pub schedules_api_url: String,
    pub upstream_timeout_secs: u64,
    pub upstream_max_concurrent: usize,
    pub min_layover_minutes: i64,
    pub route_operator: String,
    pub routes_cache_ttl: Duration,
    pub schedules_cache_ttl: Duration,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = SearchConfig::default();

        let config = Self {
            bind_addr: parse_or(&lookup, "BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 8080)))?,
            routes_api_url: string_or(&lookup, "ROUTES_API_URL", crate::routes::DEFAULT_BASE_URL),
            schedules_api_url: string_or(
                &lookup,
                "SCHEDULES_API_URL",
                crate::schedules::DEFAULT_BASE_URL,
            ),
            upstream_timeout_secs: parse_or(&lookup, "UPSTREAM_TIMEOUT_SECS", 30)?,
            upstream_max_concurrent: parse_or(
                &lookup,
                "UPSTREAM_MAX_CONCURRENT",
                defaults.max_concurrent_fetches,
            )?,
            min_layover_minutes: parse_or(&lookup, "MIN_LAYOVER_MINUTES", defaults.min_layover_mins)?,
            route_operator: string_or(&lookup, "ROUTE_OPERATOR", DEFAULT_OPERATOR),
            routes_cache_ttl: Duration::from_secs(parse_or(&lookup, "ROUTES_CACHE_TTL_SECS", 3600)?),
            schedules_cache_ttl: Duration::from_secs(parse_or(
                &lookup,
                "SCHEDULES_CACHE_TTL_SECS",
                600,
            )?),
        };

        if config.upstream_max_concurrent == 0 {
            return Err(ConfigError::OutOfRange {
                name: "UPSTREAM_MAX_CONCURRENT",
                constraint: "at least 1",
            });
        }
        if !(0..=MAX_MIN_LAYOVER_MINUTES).contains(&config.min_layover_minutes) {
            return Err(ConfigError::OutOfRange {
                name: "MIN_LAYOVER_MINUTES",
                constraint: "between 0 and 527040 (one year)",
            });
        }

        Ok(config)
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(
            self.route_operator.clone(),
            self.min_layover_minutes,
            self.upstream_max_concurrent,
        )
    }

    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            routes_ttl: self.routes_cache_ttl,
            schedules_ttl: self.schedules_cache_ttl,
            ..CacheConfig::default()
        }
    }

    pub fn routes_client_config(&self) -> RoutesClientConfig {
        RoutesClientConfig::new(&self.routes_api_url)
            .with_max_concurrent(self.upstream_max_concurrent)
            .with_timeout(self.upstream_timeout_secs)
    }

    pub fn schedules_client_config(&self) -> SchedulesClientConfig {
        SchedulesClientConfig::new(&self.schedules_api_url)
            .with_max_concurrent(self.upstream_max_concurrent)
            .with_timeout(self.upstream_timeout_secs)
    }
}

fn string_or(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            value,
            reason: e.to_string(),
        }),
    }
}
