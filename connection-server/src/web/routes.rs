//! HTTP route handlers.

use std::path::Path;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::query::{BookingApi, Pipeline, QueryError, RateSource};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// Paths other than the API routes are served from `static_dir` as-is.
pub fn create_router<B, R>(state: AppState<B, R>, static_dir: &Path) -> Router
where
    B: BookingApi + Send + Sync + 'static,
    R: RateSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/connections", get(connections::<B, R>))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Priced connections between two station masks.
///
/// `GET /connections?from=<mask>&to=<mask>&dep=<epoch-ms>[&age=<int>][&class=<int>]`
pub async fn connections<B, R>(
    State(state): State<AppState<B, R>>,
    params: Result<Query<ConnectionsParams>, QueryRejection>,
) -> Result<Json<Vec<ConnectionResult>>, AppError>
where
    B: BookingApi + Send + Sync + 'static,
    R: RateSource + Send + Sync + 'static,
{
    // Validation happens before any remote call.
    let Query(params) = params?;
    let query = params.into_query()?;

    info!(
        from = %query.from,
        to = %query.to,
        departure = %query.departure.to_iso8601(),
        class = query.travel_class.0,
        age = query.passenger_age.0,
        "connections query"
    );

    let priced = Pipeline::new(state.booking.as_ref(), state.rates.as_ref())
        .run(&query)
        .await?;

    info!(count = priced.len(), "connections found");

    Ok(Json(
        priced.iter().map(ConnectionResult::from_priced).collect(),
    ))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "rejected request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
