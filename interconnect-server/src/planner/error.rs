//! Planner error types.

use std::fmt;

use chrono::NaiveDateTime;

/// Which upstream source failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamSource {
    Routes,
    Schedules,
}

impl fmt::Display for UpstreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamSource::Routes => f.write_str("routes"),
            UpstreamSource::Schedules => f.write_str("schedules"),
        }
    }
}

/// Error from an interconnection query.
///
/// Queries fail atomically: no partial results accompany an error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlannerError {
    /// Fetching routes or schedules failed
    #[error("{upstream} upstream failed: {message}")]
    Upstream {
        upstream: UpstreamSource,
        message: String,
    },

    /// The search window is empty or reversed
    #[error("invalid search window: {start} is not before {end}")]
    InvalidWindow {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl PlannerError {
    pub fn routes(message: impl Into<String>) -> Self {
        PlannerError::Upstream {
            upstream: UpstreamSource::Routes,
            message: message.into(),
        }
    }

    pub fn schedules(message: impl Into<String>) -> Self {
        PlannerError::Upstream {
            upstream: UpstreamSource::Schedules,
            message: message.into(),
        }
    }

    /// The failing upstream, if this is an upstream failure.
    pub fn upstream_source(&self) -> Option<UpstreamSource> {
        match self {
            PlannerError::Upstream { upstream, .. } => Some(*upstream),
            PlannerError::InvalidWindow { .. } => None,
        }
    }
}
