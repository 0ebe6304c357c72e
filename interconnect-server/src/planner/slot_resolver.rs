//! Turns monthly timetables into flight slots inside a search window.

use chrono::NaiveDateTime;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

use crate::domain::{AirportCode, FlightSlot, YearMonth};

use super::error::PlannerError;
use super::provider::ScheduleProvider;

/// Resolves the flights of one route within a time window.
pub struct ScheduleSlotResolver<S> {
    schedules: S,
    fan_out: usize,
}

impl<S: ScheduleProvider> ScheduleSlotResolver<S> {
    /// Create a resolver fetching at most `fan_out` months at once.
    pub fn new(schedules: S, fan_out: usize) -> Self {
        Self {
            schedules,
            fan_out: fan_out.max(1),
        }
    }

    /// Every flight from `from` to `to` departing after `start` and arriving
    /// before `end`, both strictly.
    ///
    /// One timetable is fetched per month the window touches, concurrently.
    /// Slots come back in month order, then in timetable order, whichever
    /// month finishes first. If any month fails, the whole call fails.
    pub async fn find_flight_slots(
        &self,
        from: AirportCode,
        to: AirportCode,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<FlightSlot>, PlannerError> {
        if start >= end {
            return Err(PlannerError::InvalidWindow { start, end });
        }

        let months = YearMonth::spanning(&start, &end);
        debug!(%from, %to, months = months.len(), "Resolving flight slots");

        let per_month: Vec<Vec<FlightSlot>> = stream::iter(months)
            .map(move |month| async move {
                let schedule = self.schedules.monthly_schedule(from, to, month).await?;
                let slots = schedule
                    .flight_slots()
                    .into_iter()
                    .filter(|slot| slot.strictly_within(&start, &end))
                    .collect::<Vec<_>>();
                Ok::<_, PlannerError>(slots)
            })
            .buffered(self.fan_out)
            .try_collect()
            .await?;

        Ok(per_month.concat())
    }

    /// Access the underlying provider.
    pub fn provider(&self) -> &S {
        &self.schedules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MonthlySchedule, ScheduleDay, ScheduledFlight};
    use chrono::{NaiveDate, NaiveTime};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::Barrier;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn ym(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn one_flight(month: YearMonth, day: u32, dep: NaiveTime, arr: NaiveTime) -> MonthlySchedule {
        MonthlySchedule {
            month,
            days: vec![ScheduleDay {
                day,
                flights: vec![ScheduledFlight::new(dep, arr)],
            }],
        }
    }

    /// Timetables keyed by month, with an optional per-month delay.
    #[derive(Default)]
    struct MonthTable {
        schedules: HashMap<YearMonth, MonthlySchedule>,
        delays: HashMap<YearMonth, Duration>,
        failing: Option<YearMonth>,
        requested: Mutex<Vec<YearMonth>>,
    }

    impl ScheduleProvider for MonthTable {
        async fn monthly_schedule(
            &self,
            _origin: AirportCode,
            _destination: AirportCode,
            month: YearMonth,
        ) -> Result<Arc<MonthlySchedule>, PlannerError> {
            self.requested.lock().unwrap().push(month);
            if let Some(delay) = self.delays.get(&month) {
                tokio::time::sleep(*delay).await;
            }
            if self.failing == Some(month) {
                return Err(PlannerError::schedules(format!("{month} unavailable")));
            }
            Ok(Arc::new(
                self.schedules
                    .get(&month)
                    .cloned()
                    .unwrap_or_else(|| MonthlySchedule::empty(month)),
            ))
        }
    }

    /// Blocks every fetch until the barrier fills.
    struct Rendezvous {
        barrier: Barrier,
    }

    impl ScheduleProvider for Rendezvous {
        async fn monthly_schedule(
            &self,
            _origin: AirportCode,
            _destination: AirportCode,
            month: YearMonth,
        ) -> Result<Arc<MonthlySchedule>, PlannerError> {
            self.barrier.wait().await;
            Ok(Arc::new(MonthlySchedule::empty(month)))
        }
    }

    #[tokio::test]
    async fn one_fetch_per_month() {
        let resolver = ScheduleSlotResolver::new(MonthTable::default(), 10);

        resolver
            .find_flight_slots(
                code("DUB"),
                code("WRO"),
                at(2023, 1, 15, 0, 0),
                at(2023, 4, 2, 0, 0),
            )
            .await
            .unwrap();

        let mut requested = resolver.provider().requested.lock().unwrap().clone();
        requested.sort();
        assert_eq!(requested, vec![ym(2023, 1), ym(2023, 2), ym(2023, 3), ym(2023, 4)]);
    }

    #[tokio::test]
    async fn year_boundary_fetches_only_touched_months() {
        let resolver = ScheduleSlotResolver::new(MonthTable::default(), 10);

        resolver
            .find_flight_slots(
                code("DUB"),
                code("WRO"),
                at(2023, 12, 20, 0, 0),
                at(2024, 1, 6, 0, 0),
            )
            .await
            .unwrap();

        let mut requested = resolver.provider().requested.lock().unwrap().clone();
        requested.sort();
        assert_eq!(requested, vec![ym(2023, 12), ym(2024, 1)]);
    }

    #[tokio::test]
    async fn months_are_fetched_concurrently() {
        let resolver = ScheduleSlotResolver::new(
            Rendezvous {
                barrier: Barrier::new(3),
            },
            10,
        );

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            resolver.find_flight_slots(
                code("DUB"),
                code("WRO"),
                at(2023, 5, 10, 0, 0),
                at(2023, 7, 10, 0, 0),
            ),
        )
        .await;

        assert!(result.is_ok(), "month fetches did not overlap");
    }

    #[tokio::test]
    async fn slots_keep_month_order_regardless_of_completion() {
        let mut table = MonthTable::default();
        table.schedules.insert(
            ym(2023, 12),
            one_flight(ym(2023, 12), 28, t(10, 0), t(12, 0)),
        );
        table
            .schedules
            .insert(ym(2024, 1), one_flight(ym(2024, 1), 2, t(10, 0), t(12, 0)));
        table.delays.insert(ym(2023, 12), Duration::from_millis(50));
        let resolver = ScheduleSlotResolver::new(table, 10);

        let slots = resolver
            .find_flight_slots(
                code("DUB"),
                code("WRO"),
                at(2023, 12, 20, 0, 0),
                at(2024, 1, 6, 0, 0),
            )
            .await
            .unwrap();

        let departures: Vec<_> = slots.iter().map(|s| s.departure()).collect();
        assert_eq!(
            departures,
            vec![at(2023, 12, 28, 10, 0), at(2024, 1, 2, 10, 0)]
        );
    }

    #[tokio::test]
    async fn window_boundaries_are_exclusive() {
        let june = ym(2023, 6);
        let mut table = MonthTable::default();
        table.schedules.insert(
            june,
            MonthlySchedule {
                month: june,
                days: vec![ScheduleDay {
                    day: 1,
                    flights: vec![
                        // departs exactly at start
                        ScheduledFlight::new(t(6, 0), t(8, 0)),
                        ScheduledFlight::new(t(9, 0), t(11, 0)),
                        // arrives exactly at end
                        ScheduledFlight::new(t(16, 0), t(20, 0)),
                        ScheduledFlight::new(t(19, 0), t(21, 0)),
                    ],
                }],
            },
        );
        let resolver = ScheduleSlotResolver::new(table, 10);

        let slots = resolver
            .find_flight_slots(
                code("DUB"),
                code("WRO"),
                at(2023, 6, 1, 6, 0),
                at(2023, 6, 1, 20, 0),
            )
            .await
            .unwrap();

        assert_eq!(
            slots,
            vec![FlightSlot::new(at(2023, 6, 1, 9, 0), at(2023, 6, 1, 11, 0)).unwrap()]
        );
    }

    #[tokio::test]
    async fn overnight_flight_must_land_inside_window() {
        let june = ym(2023, 6);
        let mut table = MonthTable::default();
        table
            .schedules
            .insert(june, one_flight(june, 30, t(23, 10), t(1, 5)));
        let resolver = ScheduleSlotResolver::new(table, 10);

        let inside = resolver
            .find_flight_slots(
                code("DUB"),
                code("WRO"),
                at(2023, 6, 30, 0, 0),
                at(2023, 7, 1, 2, 0),
            )
            .await
            .unwrap();
        assert_eq!(inside.len(), 1);
        assert_eq!(inside[0].arrival(), at(2023, 7, 1, 1, 5));

        let outside = resolver
            .find_flight_slots(
                code("DUB"),
                code("WRO"),
                at(2023, 6, 30, 0, 0),
                at(2023, 6, 30, 23, 59),
            )
            .await
            .unwrap();
        assert!(outside.is_empty());
    }

    #[tokio::test]
    async fn one_failing_month_fails_the_call() {
        let table = MonthTable {
            failing: Some(ym(2023, 7)),
            ..Default::default()
        };
        let resolver = ScheduleSlotResolver::new(table, 10);

        let err = resolver
            .find_flight_slots(
                code("DUB"),
                code("WRO"),
                at(2023, 6, 1, 0, 0),
                at(2023, 8, 31, 0, 0),
            )
            .await
            .unwrap_err();

        assert!(err.to_string().contains("2023-07"));
    }

    #[tokio::test]
    async fn empty_window_is_rejected_without_fetching() {
        let resolver = ScheduleSlotResolver::new(MonthTable::default(), 10);
        let at_noon = at(2023, 6, 1, 12, 0);

        let err = resolver
            .find_flight_slots(code("DUB"), code("WRO"), at_noon, at_noon)
            .await
            .unwrap_err();

        assert!(matches!(err, PlannerError::InvalidWindow { .. }));
        assert!(resolver.provider().requested.lock().unwrap().is_empty());
    }
}
