//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CachedRoutes, CachedSchedules};
use crate::planner::ConnectionAssembler;
use crate::routes::RoutesClient;
use crate::schedules::SchedulesClient;

/// The planner as wired in production: HTTP clients behind caches.
pub type Planner = ConnectionAssembler<CachedRoutes<RoutesClient>, CachedSchedules<SchedulesClient>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Interconnection planner over the cached upstream clients
    pub planner: Arc<Planner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: Planner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}
