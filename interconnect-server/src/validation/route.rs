//! Predicates deciding whether a route counts as a usable direct hop.

use crate::domain::Route;

/// A single rule a route must satisfy.
pub trait RouteValidator: Send + Sync {
    fn is_valid_route(&self, route: &Route) -> bool;
}

/// Route must be marketed by the given operator. Case-sensitive.
#[derive(Debug, Clone)]
pub struct OperatorValidator {
    operator: String,
}

impl OperatorValidator {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
        }
    }
}

impl RouteValidator for OperatorValidator {
    fn is_valid_route(&self, route: &Route) -> bool {
        route.operator.as_deref() == Some(self.operator.as_str())
    }
}

/// Route must not pass through a connecting airport.
///
/// Listings include multi-hop itineraries sold as one route; only true
/// single-hop services are usable legs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoConnectingAirportValidator;

impl RouteValidator for NoConnectingAirportValidator {
    fn is_valid_route(&self, route: &Route) -> bool {
        route.connecting_airport.is_none()
    }
}

/// Ordered set of route rules, combined with short-circuit AND.
pub struct RouteValidatorChain {
    validators: Vec<Box<dyn RouteValidator>>,
}

impl RouteValidatorChain {
    /// A chain with no rules. Every route passes.
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// The operator and single-hop rules.
    pub fn standard(operator: impl Into<String>) -> Self {
        Self::new()
            .with(OperatorValidator::new(operator))
            .with(NoConnectingAirportValidator)
    }

    /// Append a rule.
    pub fn with(mut self, validator: impl RouteValidator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn is_valid(&self, route: &Route) -> bool {
        self.validators.iter().all(|v| v.is_valid_route(route))
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Default for RouteValidatorChain {
    fn default() -> Self {
        Self::new()
    }
}
