//! Caching layer for route and schedule responses.
//!
//! Both caches are single-flight: concurrent requests for the same key share
//! one in-flight upstream call, and its result is then served to every waiter.
//! `moka`'s `try_get_with` gives exactly this, and does not cache failures, so
//! a failed fetch is retried by the next query rather than remembered.
//!
//! The route table is a single entry (the API has no parameters). Timetables
//! are keyed by (origin, destination, month) with case-insensitive airport
//! codes, so "dub" and "DUB" share an entry.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::warn;

use crate::domain::{AirportCode, MonthlySchedule, Route, YearMonth};
use crate::planner::{PlannerError, RouteProvider, ScheduleProvider};
use crate::routes::{RouteSource, RoutesError};
use crate::schedules::{ScheduleSource, SchedulesError};

/// Cache key for timetables: (origin, destination, month).
type ScheduleKey = (AirportCode, AirportCode, YearMonth);

/// Configuration for the caches.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for the route table.
    pub routes_ttl: Duration,

    /// TTL for cached timetables.
    pub schedules_ttl: Duration,

    /// Maximum number of cached timetables.
    pub max_schedules: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            routes_ttl: Duration::from_secs(60 * 60),
            schedules_ttl: Duration::from_secs(10 * 60),
            max_schedules: 10_000,
        }
    }
}

/// Route source with a single-flight cache in front.
pub struct CachedRoutes<S> {
    source: S,
    cache: MokaCache<(), Arc<Vec<Route>>>,
}

impl<S: RouteSource> CachedRoutes<S> {
    /// Wrap a route source.
    pub fn new(source: S, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.routes_ttl)
            .max_capacity(1)
            .build();

        Self { source, cache }
    }

    /// Get the route table, fetching it at most once per TTL.
    pub async fn get_routes(&self) -> Result<Arc<Vec<Route>>, Arc<RoutesError>> {
        self.cache
            .try_get_with((), async {
                let routes = self.source.fetch_all_routes().await?;
                Ok::<_, RoutesError>(Arc::new(routes))
            })
            .await
    }

    /// Access the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Drop the cached table.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl<S: RouteSource> RouteProvider for CachedRoutes<S> {
    async fn routes(&self) -> Result<Arc<Vec<Route>>, PlannerError> {
        self.get_routes().await.map_err(|e| {
            warn!(error = %e, "Route fetch failed");
            PlannerError::routes(e.to_string())
        })
    }
}

/// Schedule source with a single-flight cache in front.
pub struct CachedSchedules<S> {
    source: S,
    cache: MokaCache<ScheduleKey, Arc<MonthlySchedule>>,
}

impl<S: ScheduleSource> CachedSchedules<S> {
    /// Wrap a schedule source.
    pub fn new(source: S, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.schedules_ttl)
            .max_capacity(config.max_schedules)
            .build();

        Self { source, cache }
    }

    /// Get a timetable, fetching it at most once per key per TTL.
    pub async fn get_schedule(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        month: YearMonth,
    ) -> Result<Arc<MonthlySchedule>, Arc<SchedulesError>> {
        self.cache
            .try_get_with((origin, destination, month), async {
                let schedule = self
                    .source
                    .fetch_schedule(origin, destination, month)
                    .await?;
                Ok::<_, SchedulesError>(Arc::new(schedule))
            })
            .await
    }

    /// Access the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Number of cached timetables (approximate, for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Drop every cached timetable.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl<S: ScheduleSource> ScheduleProvider for CachedSchedules<S> {
    async fn monthly_schedule(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        month: YearMonth,
    ) -> Result<Arc<MonthlySchedule>, PlannerError> {
        self.get_schedule(origin, destination, month)
            .await
            .map_err(|e| {
                warn!(error = %e, "Schedule fetch failed");
                PlannerError::schedules(e.to_string())
            })
    }
}
