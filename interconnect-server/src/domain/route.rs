//! Advertised routes.

use super::AirportCode;

/// One advertised origin → destination service.
///
/// Routes are not deduplicated: the route table is treated as a stream and
/// the same triple may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Origin airport
    pub origin: AirportCode,
    /// Destination airport
    pub destination: AirportCode,
    /// Marketing carrier, e.g. "RYANAIR"
    pub operator: Option<String>,
    /// Set when the "route" is itself an itinerary through another airport
    pub connecting_airport: Option<AirportCode>,
}

impl Route {
    /// A route with no connecting airport.
    pub fn new(origin: AirportCode, destination: AirportCode, operator: impl Into<String>) -> Self {
        Self {
            origin,
            destination,
            operator: Some(operator.into()),
            connecting_airport: None,
        }
    }

    /// Set the connecting airport.
    pub fn via(mut self, connecting: AirportCode) -> Self {
        self.connecting_airport = Some(connecting);
        self
    }

    /// Whether this route departs from `from` and arrives at `to`.
    pub fn serves(&self, from: &AirportCode, to: &AirportCode) -> bool {
        &self.origin == from && &self.destination == to
    }
}
