//! Data transfer objects for web requests and responses.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{AirportCode, Connection, Leg};

/// Date-time format used in responses.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Date-time format with seconds, also accepted on input.
const DATE_TIME_FORMAT_SECS: &str = "%Y-%m-%dT%H:%M:%S";

/// Query string of an interconnection search.
///
/// Every field is optional here so that a missing parameter is reported with
/// the same error body as a malformed one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterconnectionRequest {
    /// Departure airport IATA code
    pub departure: Option<String>,

    /// Arrival airport IATA code
    pub arrival: Option<String>,

    /// Earliest departure, `YYYY-MM-DDTHH:MM`
    pub departure_date_time: Option<String>,

    /// Latest arrival, `YYYY-MM-DDTHH:MM`
    pub arrival_date_time: Option<String>,
}

/// A request that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidRequest(pub String);

/// A validated interconnection search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterconnectionQuery {
    pub departure: AirportCode,
    pub arrival: AirportCode,
    pub window_start: NaiveDateTime,
    pub window_end: NaiveDateTime,
}

impl InterconnectionRequest {
    /// Check every parameter, reporting the first problem found.
    pub fn validate(&self) -> Result<InterconnectionQuery, InvalidRequest> {
        let departure = parse_airport("departure", self.departure.as_deref())?;
        let arrival = parse_airport("arrival", self.arrival.as_deref())?;
        let window_start =
            parse_date_time("departureDateTime", self.departure_date_time.as_deref())?;
        let window_end = parse_date_time("arrivalDateTime", self.arrival_date_time.as_deref())?;

        if window_start >= window_end {
            return Err(InvalidRequest(format!(
                "departureDateTime ({}) must be before arrivalDateTime ({})",
                format_date_time(&window_start),
                format_date_time(&window_end)
            )));
        }

        Ok(InterconnectionQuery {
            departure,
            arrival,
            window_start,
            window_end,
        })
    }
}

fn required<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str, InvalidRequest> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(InvalidRequest(format!("missing parameter: {name}"))),
    }
}

fn parse_airport(name: &str, value: Option<&str>) -> Result<AirportCode, InvalidRequest> {
    let value = required(name, value)?;
    AirportCode::parse(value).map_err(|e| InvalidRequest(format!("invalid {name}: {e}")))
}

/// Parse `YYYY-MM-DDTHH:MM`, with optional seconds.
pub fn parse_date_time(name: &str, value: Option<&str>) -> Result<NaiveDateTime, InvalidRequest> {
    let value = required(name, value)?;
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT_SECS))
        .map_err(|_| {
            InvalidRequest(format!(
                "invalid {name}: expected YYYY-MM-DDTHH:MM, got {value:?}"
            ))
        })
}

pub fn format_date_time(instant: &NaiveDateTime) -> String {
    instant.format(DATE_TIME_FORMAT).to_string()
}

/// One connection in the response.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    /// Number of intermediate stops
    pub stops: usize,

    pub legs: Vec<LegResult>,
}

/// One flight of a connection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegResult {
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_date_time: String,
    pub arrival_date_time: String,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Numeric application error code
    pub code: u32,

    /// Human-readable summary
    pub message: String,

    /// Further detail, when there is any worth sharing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// Conversion implementations

impl ConnectionResult {
    /// Create from a domain Connection.
    pub fn from_connection(connection: &Connection) -> Self {
        Self {
            stops: connection.stops(),
            legs: connection.legs().iter().map(LegResult::from_leg).collect(),
        }
    }
}

impl LegResult {
    /// Create from a domain Leg.
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            departure_airport: leg.origin.to_string(),
            arrival_airport: leg.destination.to_string(),
            departure_date_time: format_date_time(&leg.departure),
            arrival_date_time: format_date_time(&leg.arrival),
        }
    }
}
