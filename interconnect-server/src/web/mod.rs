//! Web layer for the interconnection service.
//!
//! Provides the HTTP endpoint for searching flight interconnections.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, Planner};
