//! Calendar and wall-clock helpers.
//!
//! All times are airport-local wall-clock times. No timezone conversion is
//! ever performed: a departure at 18:00 in Dublin and an arrival at 21:35 in
//! Wrocław are combined with the same calendar date as-is.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A calendar month.
///
/// Ordering is chronological.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a year-month. Returns `None` unless `month` is 1..=12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing the given date-time.
    pub fn of(instant: &NaiveDateTime) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following month, rolling over into January of the next year.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The date of `day` in this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Every month intersecting `[start, end]`, in chronological order.
    ///
    /// Both endpoints' months are included. Returns an empty list when
    /// `end` falls in an earlier month than `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use interconnect_server::domain::YearMonth;
    ///
    /// let start = NaiveDate::from_ymd_opt(2023, 12, 20).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let months = YearMonth::spanning(&start, &end);
    /// assert_eq!(months.len(), 2);
    /// assert_eq!(months[0].to_string(), "2023-12");
    /// assert_eq!(months[1].to_string(), "2024-01");
    /// ```
    pub fn spanning(start: &NaiveDateTime, end: &NaiveDateTime) -> Vec<Self> {
        let last = Self::of(end);
        let mut months = Vec::new();
        let mut current = Self::of(start);
        while current <= last {
            months.push(current);
            current = current.next();
        }
        months
    }
}

impl fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YearMonth({self})")
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parse a wall-clock time in "HH:MM" format.
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| TimeError::new("expected HH:MM"))
}

/// Combine a departure and arrival time-of-day with the date of departure.
///
/// An arrival time at or before the departure time is an overnight flight
/// and lands on the following day. Giving both times the departure date
/// instead would put such an arrival before its departure, so the roll is
/// intentional.
pub fn flight_instants(
    date: NaiveDate,
    departure: NaiveTime,
    arrival: NaiveTime,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let departs = date.and_time(departure);
    let arrival_date = if arrival > departure {
        date
    } else {
        date.succ_opt()?
    };
    Some((departs, arrival_date.and_time(arrival)))
}
