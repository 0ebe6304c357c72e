//! Schedule API HTTP client.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{AirportCode, MonthlySchedule, YearMonth};

use super::ScheduleSource;
use super::convert::convert_schedule;
use super::error::{ScheduleFetchError, SchedulesError};
use super::types::ScheduleResponse;

/// Default base URL for the schedule API.
pub const DEFAULT_BASE_URL: &str = "https://services-api.ryanair.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 10;

/// Configuration for the schedule API client.
#[derive(Debug, Clone)]
pub struct SchedulesClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SchedulesClientConfig {
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

impl Default for SchedulesClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the monthly timetable API.
///
/// Uses a semaphore to limit concurrent requests: a query spanning many
/// months through many intermediate airports fans out widely.
#[derive(Debug, Clone)]
pub struct SchedulesClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl SchedulesClient {
    /// Create a new schedule API client.
    pub fn new(config: SchedulesClientConfig) -> Result<Self, ScheduleFetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    fn url(&self, origin: &AirportCode, destination: &AirportCode, month: YearMonth) -> String {
        format!(
            "{}/timtbl/3/schedules/{}/{}/years/{}/months/{}",
            self.base_url,
            origin.canonical(),
            destination.canonical(),
            month.year(),
            month.month()
        )
    }

    /// Fetch the timetable of one route for one month.
    ///
    /// An empty or `null` body is an empty timetable.
    pub async fn get_schedule(
        &self,
        origin: &AirportCode,
        destination: &AirportCode,
        month: YearMonth,
    ) -> Result<MonthlySchedule, SchedulesError> {
        let fail = |kind: ScheduleFetchError| SchedulesError::new(*origin, *destination, month, kind);

        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| fail(ScheduleFetchError::Client("semaphore closed".to_string())))?;

        let url = self.url(origin, destination, month);
        debug!(%url, "Fetching schedule");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| fail(e.into()))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(fail(ScheduleFetchError::Api {
                status: status.as_u16(),
                message: body,
            }));
        }

        let body = response.text().await.map_err(|e| fail(e.into()))?;

        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(MonthlySchedule::empty(month));
        }

        let parsed: ScheduleResponse = serde_json::from_str(&body).map_err(|e| {
            fail(ScheduleFetchError::Json {
                message: e.to_string(),
            })
        })?;

        Ok(convert_schedule(&parsed, month))
    }
}

impl ScheduleSource for SchedulesClient {
    async fn fetch_schedule(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        month: YearMonth,
    ) -> Result<MonthlySchedule, SchedulesError> {
        self.get_schedule(&origin, &destination, month).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = SchedulesClientConfig::new("http://localhost:8080")
            .with_max_concurrent(20)
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 20);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = SchedulesClientConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn url_uses_upper_case_codes_and_unpadded_month() {
        let client = SchedulesClient::new(SchedulesClientConfig::new("http://localhost:8080/")).unwrap();
        let url = client.url(
            &AirportCode::parse("dub").unwrap(),
            &AirportCode::parse("Wro").unwrap(),
            YearMonth::new(2023, 6).unwrap(),
        );

        assert_eq!(
            url,
            "http://localhost:8080/timtbl/3/schedules/DUB/WRO/years/2023/months/6"
        );
    }
}
