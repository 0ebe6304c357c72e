//! Route API response types.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{AirportCode, Route};

/// One entry of the routes listing.
///
/// The API returns many more fields (route group, seasonal flags...). Only
/// the ones the planner needs are kept.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub airport_from: String,
    pub airport_to: String,
    #[serde(default)]
    pub connecting_airport: Option<String>,
    #[serde(default)]
    pub operator: Option<String>,
}

impl RouteDto {
    /// Convert to a domain route. Returns `None` if any airport code is invalid.
    pub fn to_route(&self) -> Option<Route> {
        let origin = AirportCode::parse(&self.airport_from).ok()?;
        let destination = AirportCode::parse(&self.airport_to).ok()?;
        let connecting_airport = match &self.connecting_airport {
            Some(code) => Some(AirportCode::parse(code).ok()?),
            None => None,
        };

        Some(Route {
            origin,
            destination,
            operator: self.operator.clone(),
            connecting_airport,
        })
    }
}

/// Convert a routes listing, skipping entries with malformed airport codes.
pub fn convert_routes(dtos: &[RouteDto]) -> Vec<Route> {
    dtos.iter()
        .filter_map(|dto| {
            let route = dto.to_route();
            if route.is_none() {
                debug!(
                    from = %dto.airport_from,
                    to = %dto.airport_to,
                    "Skipping route with malformed airport code"
                );
            }
            route
        })
        .collect()
}
