//! Monthly timetables and the flight slots derived from them.

use chrono::{NaiveDateTime, NaiveTime};

use super::time::{YearMonth, flight_instants};

/// A concrete, dated flight: departure and arrival instants.
///
/// Departure is always strictly before arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlightSlot {
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
}

impl FlightSlot {
    /// Create a slot. Returns `None` unless departure is before arrival.
    pub fn new(departure: NaiveDateTime, arrival: NaiveDateTime) -> Option<Self> {
        (departure < arrival).then_some(Self { departure, arrival })
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Whether the slot lies strictly inside `(start, end)`.
    ///
    /// A slot departing exactly at `start` or arriving exactly at `end` is
    /// outside.
    pub fn strictly_within(&self, start: &NaiveDateTime, end: &NaiveDateTime) -> bool {
        *start < self.departure && self.arrival < *end
    }
}

/// One flight as listed in a timetable. Either time may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScheduledFlight {
    pub departure: Option<NaiveTime>,
    pub arrival: Option<NaiveTime>,
}

impl ScheduledFlight {
    pub fn new(departure: NaiveTime, arrival: NaiveTime) -> Self {
        Self {
            departure: Some(departure),
            arrival: Some(arrival),
        }
    }
}

/// Flights operating on one day of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDay {
    /// Day of month, 1-based
    pub day: u32,
    pub flights: Vec<ScheduledFlight>,
}

/// The timetable of one route for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySchedule {
    pub month: YearMonth,
    pub days: Vec<ScheduleDay>,
}

impl MonthlySchedule {
    /// A month with no flights.
    pub fn empty(month: YearMonth) -> Self {
        Self {
            month,
            days: Vec::new(),
        }
    }

    /// Build dated slots for every complete flight, in day then listing order.
    ///
    /// Flights missing a time, and days that do not exist in the month, are
    /// dropped.
    pub fn flight_slots(&self) -> Vec<FlightSlot> {
        self.days
            .iter()
            .filter_map(|day| Some((self.month.day(day.day)?, &day.flights)))
            .flat_map(|(date, flights)| {
                flights.iter().filter_map(move |flight| {
                    let (dep, arr) = flight_instants(date, flight.departure?, flight.arrival?)?;
                    FlightSlot::new(dep, arr)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, d)
            .unwrap()
            .and_time(t(h, m))
    }

    fn june() -> YearMonth {
        YearMonth::new(2023, 6).unwrap()
    }

    #[test]
    fn slot_requires_departure_before_arrival() {
        assert!(FlightSlot::new(at(1, 6, 25), at(1, 7, 35)).is_some());
        assert!(FlightSlot::new(at(1, 7, 35), at(1, 6, 25)).is_none());
        assert!(FlightSlot::new(at(1, 7, 35), at(1, 7, 35)).is_none());
    }

    #[test]
    fn strictly_within_excludes_boundaries() {
        let slot = FlightSlot::new(at(1, 6, 0), at(1, 8, 0)).unwrap();

        assert!(slot.strictly_within(&at(1, 5, 59), &at(1, 8, 1)));
        assert!(!slot.strictly_within(&at(1, 6, 0), &at(1, 9, 0)));
        assert!(!slot.strictly_within(&at(1, 5, 0), &at(1, 8, 0)));
    }

    #[test]
    fn slots_in_day_then_listing_order() {
        let schedule = MonthlySchedule {
            month: june(),
            days: vec![
                ScheduleDay {
                    day: 1,
                    flights: vec![
                        ScheduledFlight::new(t(18, 0), t(21, 35)),
                        ScheduledFlight::new(t(6, 25), t(7, 35)),
                    ],
                },
                ScheduleDay {
                    day: 2,
                    flights: vec![ScheduledFlight::new(t(9, 50), t(13, 20))],
                },
            ],
        };

        let slots = schedule.flight_slots();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].departure(), at(1, 18, 0));
        assert_eq!(slots[1].departure(), at(1, 6, 25));
        assert_eq!(slots[2].departure(), at(2, 9, 50));
        assert_eq!(slots[2].arrival(), at(2, 13, 20));
    }

    #[test]
    fn flights_missing_a_time_are_dropped() {
        let schedule = MonthlySchedule {
            month: june(),
            days: vec![ScheduleDay {
                day: 1,
                flights: vec![
                    ScheduledFlight {
                        departure: None,
                        arrival: Some(t(7, 35)),
                    },
                    ScheduledFlight {
                        departure: Some(t(6, 25)),
                        arrival: None,
                    },
                    ScheduledFlight::default(),
                    ScheduledFlight::new(t(18, 0), t(21, 35)),
                ],
            }],
        };

        let slots = schedule.flight_slots();
        assert_eq!(slots, vec![FlightSlot::new(at(1, 18, 0), at(1, 21, 35)).unwrap()]);
    }

    #[test]
    fn nonexistent_days_are_dropped() {
        let schedule = MonthlySchedule {
            month: june(),
            days: vec![
                ScheduleDay {
                    day: 31,
                    flights: vec![ScheduledFlight::new(t(6, 0), t(7, 0))],
                },
                ScheduleDay {
                    day: 0,
                    flights: vec![ScheduledFlight::new(t(6, 0), t(7, 0))],
                },
            ],
        };

        assert!(schedule.flight_slots().is_empty());
    }

    #[test]
    fn empty_schedule_has_no_slots() {
        assert!(MonthlySchedule::empty(june()).flight_slots().is_empty());
    }
}
