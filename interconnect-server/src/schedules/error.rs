//! Schedule API error types.

use crate::domain::{AirportCode, YearMonth};

/// What went wrong while fetching a timetable.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleFetchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client could not be constructed or used
    #[error("client error: {0}")]
    Client(String),
}

/// A failed timetable fetch, tagged with the route and month requested.
#[derive(Debug, thiserror::Error)]
#[error("failed to fetch schedule from {origin} to {destination} ({month}): {kind}")]
pub struct SchedulesError {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub month: YearMonth,
    #[source]
    pub kind: ScheduleFetchError,
}

impl SchedulesError {
    pub fn new(
        origin: AirportCode,
        destination: AirportCode,
        month: YearMonth,
        kind: impl Into<ScheduleFetchError>,
    ) -> Self {
        Self {
            origin,
            destination,
            month,
            kind: kind.into(),
        }
    }
}
