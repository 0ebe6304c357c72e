//! Route API HTTP client.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::Route;

use super::RouteSource;
use super::error::RoutesError;
use super::types::{RouteDto, convert_routes};

/// Default base URL for the route API.
pub const DEFAULT_BASE_URL: &str = "https://services-api.ryanair.com";

/// Path of the full route listing.
const ROUTES_PATH: &str = "/views/locate/3/routes";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 10;

/// Configuration for the route API client.
#[derive(Debug, Clone)]
pub struct RoutesClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RoutesClientConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RoutesClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the route API.
#[derive(Debug, Clone)]
pub struct RoutesClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl RoutesClient {
    /// Create a new route API client.
    pub fn new(config: RoutesClientConfig) -> Result<Self, RoutesError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Fetch the full route listing.
    pub async fn fetch_all(&self) -> Result<Vec<Route>, RoutesError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RoutesError::Client("semaphore closed".to_string()))?;

        let url = format!("{}{}", self.base_url, ROUTES_PATH);
        debug!(%url, "Fetching routes");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let dtos: Vec<RouteDto> = serde_json::from_str(&body).map_err(|e| RoutesError::Json {
            message: e.to_string(),
        })?;

        let routes = convert_routes(&dtos);
        debug!(listed = dtos.len(), kept = routes.len(), "Fetched routes");
        Ok(routes)
    }
}

impl RouteSource for RoutesClient {
    async fn fetch_all_routes(&self) -> Result<Vec<Route>, RoutesError> {
        self.fetch_all().await
    }
}
