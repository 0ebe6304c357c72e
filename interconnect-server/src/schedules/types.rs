//! Schedule API response types.
//!
//! These types match the JSON returned by the monthly timetable endpoint.
//! Every field is optional: the API omits days without flights and, now and
//! then, flights without times.

use serde::{Deserialize, Serialize};

/// Timetable of one route for one month.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScheduleResponse {
    /// Month number, 1-based
    #[serde(default)]
    pub month: Option<u32>,

    /// Days with at least one flight
    #[serde(default)]
    pub days: Option<Vec<DayDto>>,
}

/// Flights operating on one day.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DayDto {
    /// Day of month, 1-based
    #[serde(default)]
    pub day: Option<u32>,

    #[serde(default)]
    pub flights: Option<Vec<FlightDto>>,
}

/// A single flight.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    /// Departure time, "HH:MM" local to the origin
    #[serde(default)]
    pub departure_time: Option<String>,

    /// Arrival time, "HH:MM" local to the destination
    #[serde(default)]
    pub arrival_time: Option<String>,

    /// Carrier code, e.g. "FR"
    #[serde(default)]
    pub carrier_code: Option<String>,

    /// Flight number without carrier code
    #[serde(default)]
    pub number: Option<String>,
}
