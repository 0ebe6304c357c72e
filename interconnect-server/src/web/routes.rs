//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::any::Any;

use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::planner::PlannerError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/interconnections", get(interconnections))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search direct and one-stop flights between two airports.
async fn interconnections(
    State(state): State<AppState>,
    query: Result<Query<InterconnectionRequest>, QueryRejection>,
) -> Result<Json<Vec<ConnectionResult>>, AppError> {
    let Query(req) = query.map_err(|e| AppError::BadRequest {
        message: e.body_text(),
    })?;
    let query = req.validate()?;

    let connections = state
        .planner
        .find_interconnections(
            query.departure,
            query.arrival,
            query.window_start,
            query.window_end,
        )
        .await?;

    Ok(Json(
        connections
            .iter()
            .map(ConnectionResult::from_connection)
            .collect(),
    ))
}

/// Turn a handler panic into a 500 so the connection still gets a reply.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal { message }.into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl AppError {
    /// Application error code sent in the response body.
    pub fn code(&self) -> u32 {
        match self {
            AppError::BadRequest { .. } => 4000,
            AppError::Internal { .. } => 5001,
            AppError::Upstream { .. } => 5002,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<InvalidRequest> for AppError {
    fn from(e: InvalidRequest) -> Self {
        AppError::BadRequest { message: e.0 }
    }
}

impl From<PlannerError> for AppError {
    fn from(e: PlannerError) -> Self {
        match e {
            PlannerError::InvalidWindow { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
            PlannerError::Upstream { .. } => AppError::Upstream {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let body = match self {
            AppError::BadRequest { message } => {
                warn!(%status, %message, "Rejected request");
                ErrorResponse {
                    code,
                    message: "Invalid request".into(),
                    details: Some(message),
                }
            }
            AppError::Upstream { message } => {
                warn!(%status, %message, "Upstream failure");
                ErrorResponse {
                    code,
                    message: "External API error".into(),
                    details: Some(message),
                }
            }
            AppError::Internal { message } => {
                // Internal detail stays in the logs
                error!(%status, %message, "Internal error");
                ErrorResponse {
                    code,
                    message: "Internal server error".into(),
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
