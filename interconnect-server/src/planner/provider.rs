//! Read-only access to the two upstream data sets.
//!
//! The planner never talks to the APIs directly. It reads through these
//! traits, which the caching layer implements with single-flight semantics
//! and tests implement with in-memory fakes.

use std::future::Future;
use std::sync::Arc;

use crate::domain::{AirportCode, MonthlySchedule, Route, YearMonth};

use super::error::PlannerError;

/// Provides the full route table.
pub trait RouteProvider: Send + Sync {
    fn routes(&self) -> impl Future<Output = Result<Arc<Vec<Route>>, PlannerError>> + Send;
}

/// Provides the timetable of a route for one month.
pub trait ScheduleProvider: Send + Sync {
    fn monthly_schedule(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        month: YearMonth,
    ) -> impl Future<Output = Result<Arc<MonthlySchedule>, PlannerError>> + Send;
}
