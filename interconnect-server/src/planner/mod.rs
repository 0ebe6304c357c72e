//! Interconnection planner.
//!
//! This module answers the core question: "which flights get me from this
//! airport to that one inside my travel window, with at most one change?"
//!
//! It reads routes and timetables through the provider traits, so the same
//! search runs against the cached HTTP clients in production and against
//! in-memory fakes in tests.

mod assembler;
mod config;
mod error;
mod provider;
mod route_index;
mod slot_resolver;


pub use assembler::ConnectionAssembler;
pub use config::{DEFAULT_OPERATOR, SearchConfig};
pub use error::{PlannerError, UpstreamSource};
pub use provider::{RouteProvider, ScheduleProvider};
pub use route_index::{RouteGraphIndex, find_intermediates, has_direct_route};
pub use slot_resolver::ScheduleSlotResolver;
