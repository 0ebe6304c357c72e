//! Route API client.
//!
//! The route API publishes every airport pair the carrier (and its partners)
//! advertise as one big listing. There are no query parameters: the planner
//! always fetches the whole table and filters in memory.

mod client;
mod error;
mod types;

use std::future::Future;

use crate::domain::Route;

pub use client::{DEFAULT_BASE_URL, RoutesClient, RoutesClientConfig};
pub use error::RoutesError;
pub use types::{RouteDto, convert_routes};

/// Something that can list every known route.
///
/// Implemented by the HTTP client and by test doubles.
pub trait RouteSource: Send + Sync {
    fn fetch_all_routes(&self) -> impl Future<Output = Result<Vec<Route>, RoutesError>> + Send;
}
