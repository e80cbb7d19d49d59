//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::domain::RouteError;
use crate::planner;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// CORS is fully permissive: the service is a read-only query API for a
/// browser frontend served from elsewhere.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/route", post(compute_route))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Service identification message.
async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Metro route planner running" }))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The full station catalog.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResult>> {
    let stations = state
        .network
        .stations()
        .map(StationResult::from_station)
        .collect();
    Json(stations)
}

/// Plan a route between two stations.
async fn compute_route(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let result = planner::plan_route(
        &state.network,
        &req.origin_id,
        &req.destination_id,
        &req.options,
    )?;
    Ok(Json(RouteResponse::from_result(&result)))
}

/// Application error type.
#[derive(Debug, PartialEq)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match &e {
            RouteError::StationNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            RouteError::NoRouteFound { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::warn!(%status, %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
