//! Pluggable validation rules.
//!
//! Both chains are ordered lists of predicates evaluated with short-circuit
//! AND semantics. New rules (say, a maximum total trip time) are added here
//! without touching the planner.

mod connection;
mod route;

pub use connection::{ConnectionValidatorChain, FlightConnectionValidator, MinimumLayover};
pub use route::{
    NoConnectingAirportValidator, OperatorValidator, RouteValidator, RouteValidatorChain,
};
