//! Route graph queries.
//!
//! Answers two questions over the (cached) route table, counting only routes
//! that pass the route validator chain:
//! - is there a direct route from A to B?
//! - which airports can be reached from A in one hop and also reach B in one?

use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::{AirportCode, Route};
use crate::validation::RouteValidatorChain;

use super::error::PlannerError;
use super::provider::RouteProvider;

/// Whether any valid route flies `from` → `to`.
pub fn has_direct_route(
    routes: &[Route],
    validators: &RouteValidatorChain,
    from: &AirportCode,
    to: &AirportCode,
) -> bool {
    routes
        .iter()
        .any(|route| validators.is_valid(route) && route.serves(from, to))
}

/// Airports reachable from `from` by one valid hop that reach `to` by one.
///
/// Computes `Reach(from) ∩ ReachedBy(to)`. Codes compare case-insensitively;
/// each airport is reported in the spelling used by the routes leaving
/// `from`, picking the lexicographically smallest when the listing spells it
/// several ways. The result does not depend on the order of `routes`.
pub fn find_intermediates(
    routes: &[Route],
    validators: &RouteValidatorChain,
    from: &AirportCode,
    to: &AirportCode,
) -> BTreeSet<AirportCode> {
    let mut reach = BTreeSet::new();
    let mut reached_by = BTreeSet::new();

    for route in routes.iter().filter(|route| validators.is_valid(route)) {
        if &route.origin == from {
            insert_lowest_spelling(&mut reach, route.destination);
        }
        if &route.destination == to {
            reached_by.insert(route.origin);
        }
    }

    reach.retain(|airport| reached_by.contains(airport));
    reach
}

fn insert_lowest_spelling(set: &mut BTreeSet<AirportCode>, code: AirportCode) {
    match set.get(&code) {
        Some(existing) if existing.as_str() <= code.as_str() => {}
        _ => {
            set.replace(code);
        }
    }
}

/// Route graph over a route provider.
pub struct RouteGraphIndex<R> {
    routes: R,
    validators: RouteValidatorChain,
}

impl<R: RouteProvider> RouteGraphIndex<R> {
    /// Create an index over `routes`, counting only routes passing `validators`.
    pub fn new(routes: R, validators: RouteValidatorChain) -> Self {
        Self { routes, validators }
    }

    /// Whether a valid direct route exists from `from` to `to`.
    pub async fn exists_direct_route(
        &self,
        from: &AirportCode,
        to: &AirportCode,
    ) -> Result<bool, PlannerError> {
        let routes = self.routes.routes().await?;
        let exists = has_direct_route(&routes, &self.validators, from, to);
        debug!(%from, %to, exists, "Checked direct route");
        Ok(exists)
    }

    /// Airports usable as the single stop between `from` and `to`.
    pub async fn intermediate_airports(
        &self,
        from: &AirportCode,
        to: &AirportCode,
    ) -> Result<BTreeSet<AirportCode>, PlannerError> {
        let routes = self.routes.routes().await?;
        let intermediates = find_intermediates(&routes, &self.validators, from, to);
        debug!(%from, %to, count = intermediates.len(), "Found intermediate airports");
        Ok(intermediates)
    }

    /// Access the underlying provider.
    pub fn provider(&self) -> &R {
        &self.routes
    }
}
