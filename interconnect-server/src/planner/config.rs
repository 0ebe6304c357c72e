//! Search configuration for the interconnection planner.

use chrono::Duration;

/// Marketing carrier whose routes are considered by default.
pub const DEFAULT_OPERATOR: &str = "RYANAIR";

/// Configuration parameters for interconnection search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Operator a route must be marketed by to count (exact match).
    pub operator: String,

    /// Minimum time on the ground between two legs (minutes).
    /// A layover of exactly this length is accepted.
    pub min_layover_mins: i64,

    /// Maximum number of months or intermediate airports resolved at once.
    pub max_concurrent_fetches: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        operator: impl Into<String>,
        min_layover_mins: i64,
        max_concurrent_fetches: usize,
    ) -> Self {
        Self {
            operator: operator.into(),
            min_layover_mins,
            max_concurrent_fetches,
        }
    }

    /// Returns the minimum layover as a Duration, saturating when the
    /// minute count does not fit.
    pub fn min_layover(&self) -> Duration {
        Duration::try_minutes(self.min_layover_mins).unwrap_or(if self.min_layover_mins < 0 {
            Duration::MIN
        } else {
            Duration::MAX
        })
    }

    /// Fan-out width, never zero.
    pub fn fan_out(&self) -> usize {
        self.max_concurrent_fetches.max(1)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            operator: DEFAULT_OPERATOR.to_string(),
            min_layover_mins: 120, // 2 hours
            max_concurrent_fetches: 10,
        }
    }
}
