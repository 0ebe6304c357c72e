//! Conversion from schedule API types to domain types.

use tracing::warn;

use crate::domain::{MonthlySchedule, ScheduleDay, ScheduledFlight, YearMonth, parse_hhmm};

use super::types::{DayDto, FlightDto, ScheduleResponse};

/// Convert a timetable response for `month`.
///
/// A response without a month or without days is an empty schedule. Days
/// without a day number are skipped; unparseable times count as missing.
pub fn convert_schedule(response: &ScheduleResponse, month: YearMonth) -> MonthlySchedule {
    let (Some(listed_month), Some(days)) = (response.month, response.days.as_ref()) else {
        return MonthlySchedule::empty(month);
    };

    if listed_month != month.month() {
        warn!(
            requested = %month,
            listed_month,
            "Schedule response lists a different month, using the requested one"
        );
    }

    MonthlySchedule {
        month,
        days: days.iter().filter_map(convert_day).collect(),
    }
}

fn convert_day(day: &DayDto) -> Option<ScheduleDay> {
    let number = day.day?;
    let flights = day
        .flights
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(convert_flight)
        .collect();

    Some(ScheduleDay {
        day: number,
        flights,
    })
}

fn convert_flight(flight: &FlightDto) -> ScheduledFlight {
    ScheduledFlight {
        departure: flight
            .departure_time
            .as_deref()
            .and_then(|t| parse_hhmm(t).ok()),
        arrival: flight
            .arrival_time
            .as_deref()
            .and_then(|t| parse_hhmm(t).ok()),
    }
}
