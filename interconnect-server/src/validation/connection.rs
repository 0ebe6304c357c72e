//! Predicates deciding whether two consecutive flights form a legal connection.

use chrono::Duration;

use crate::domain::FlightSlot;

/// A single rule a (first leg, second leg) pair must satisfy.
pub trait FlightConnectionValidator: Send + Sync {
    fn is_valid_connection(&self, first: &FlightSlot, second: &FlightSlot) -> bool;
}

/// The second flight must leave at least `min` after the first one lands.
///
/// A layover of exactly `min` is accepted.
#[derive(Debug, Clone, Copy)]
pub struct MinimumLayover {
    min: Duration,
}

impl MinimumLayover {
    pub fn new(min: Duration) -> Self {
        Self { min }
    }

    pub fn min(&self) -> Duration {
        self.min
    }
}

impl Default for MinimumLayover {
    fn default() -> Self {
        Self::new(Duration::hours(2))
    }
}

impl FlightConnectionValidator for MinimumLayover {
    fn is_valid_connection(&self, first: &FlightSlot, second: &FlightSlot) -> bool {
        first
            .arrival()
            .checked_add_signed(self.min)
            .is_some_and(|earliest| earliest <= second.departure())
    }
}

/// Ordered set of connection rules, combined with short-circuit AND.
pub struct ConnectionValidatorChain {
    validators: Vec<Box<dyn FlightConnectionValidator>>,
}

impl ConnectionValidatorChain {
    /// A chain with no rules. Every pair passes.
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// The minimum-layover rule.
    pub fn standard(min_layover: Duration) -> Self {
        Self::new().with(MinimumLayover::new(min_layover))
    }

    /// Append a rule.
    pub fn with(mut self, validator: impl FlightConnectionValidator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn is_valid_connection(&self, first: &FlightSlot, second: &FlightSlot) -> bool {
        self.validators
            .iter()
            .all(|v| v.is_valid_connection(first, second))
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Default for ConnectionValidatorChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn slot(dep: (u32, u32), arr: (u32, u32)) -> FlightSlot {
        FlightSlot::new(at(dep.0, dep.1), at(arr.0, arr.1)).unwrap()
    }

    #[test]
    fn layover_exactly_minimum_is_valid() {
        let rule = MinimumLayover::default();
        let first = slot((6, 25), (7, 35));

        assert!(rule.is_valid_connection(&first, &slot((9, 35), (12, 0))));
    }

    #[test]
    fn layover_one_minute_short_is_invalid() {
        let rule = MinimumLayover::default();
        let first = slot((6, 25), (7, 35));

        assert!(!rule.is_valid_connection(&first, &slot((9, 34), (12, 0))));
    }

    #[test]
    fn longer_layover_is_valid() {
        let rule = MinimumLayover::default();
        assert!(rule.is_valid_connection(&slot((6, 25), (7, 35)), &slot((9, 50), (13, 20))));
    }

    #[test]
    fn second_leg_before_first_is_invalid() {
        let rule = MinimumLayover::new(Duration::zero());
        assert!(!rule.is_valid_connection(&slot((9, 50), (13, 20)), &slot((6, 25), (7, 35))));
    }

    #[test]
    fn custom_minimum() {
        let rule = MinimumLayover::new(Duration::minutes(30));
        let first = slot((6, 25), (7, 35));

        assert_eq!(rule.min(), Duration::minutes(30));
        assert!(rule.is_valid_connection(&first, &slot((8, 5), (9, 0))));
        assert!(!rule.is_valid_connection(&first, &slot((8, 4), (9, 0))));
    }

    #[test]
    fn huge_minimum_rejects_instead_of_overflowing() {
        let rule = MinimumLayover::new(Duration::MAX);
        assert!(!rule.is_valid_connection(&slot((6, 25), (7, 35)), &slot((9, 50), (13, 20))));

        let rule = MinimumLayover::new(Duration::minutes(200_000_000_000));
        assert!(!rule.is_valid_connection(&slot((6, 25), (7, 35)), &slot((9, 50), (13, 20))));
    }

    struct LandsBeforeNoon;

    impl FlightConnectionValidator for LandsBeforeNoon {
        fn is_valid_connection(&self, _first: &FlightSlot, second: &FlightSlot) -> bool {
            second.arrival() < at(12, 0)
        }
    }

    #[test]
    fn chain_requires_every_rule() {
        let chain = ConnectionValidatorChain::standard(Duration::hours(2)).with(LandsBeforeNoon);
        let first = slot((6, 25), (7, 35));

        assert_eq!(chain.len(), 2);
        assert!(chain.is_valid_connection(&first, &slot((9, 35), (11, 0))));
        assert!(!chain.is_valid_connection(&first, &slot((9, 35), (13, 0))));
        assert!(!chain.is_valid_connection(&first, &slot((8, 0), (11, 0))));
    }

    #[test]
    fn empty_chain_accepts_everything() {
        let chain = ConnectionValidatorChain::default();
        assert!(chain.is_empty());
        assert!(chain.is_valid_connection(&slot((9, 50), (13, 20)), &slot((6, 25), (7, 35))));
    }
}
