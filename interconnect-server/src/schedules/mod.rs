//! Schedule API client.
//!
//! The schedule API serves one route's timetable one calendar month at a
//! time. Times are wall-clock times local to each airport, given as "HH:MM"
//! without a date: the date comes from the month requested and the day entry.

mod client;
mod convert;
mod error;
mod types;

use std::future::Future;

use crate::domain::{AirportCode, MonthlySchedule, YearMonth};

pub use client::{DEFAULT_BASE_URL, SchedulesClient, SchedulesClientConfig};
pub use convert::convert_schedule;
pub use error::{ScheduleFetchError, SchedulesError};
pub use types::{DayDto, FlightDto, ScheduleResponse};

/// Something that can produce the timetable of a route for a month.
///
/// Implemented by the HTTP client and by test doubles.
pub trait ScheduleSource: Send + Sync {
    fn fetch_schedule(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        month: YearMonth,
    ) -> impl Future<Output = Result<MonthlySchedule, SchedulesError>> + Send;
}
