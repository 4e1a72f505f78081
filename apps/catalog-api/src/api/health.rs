//! Health check endpoints

use axum::{routing::get, Json, Router};
use axum_helpers::AppError;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
    version: String,
}

fn health_response(status: &str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: status.to_string(),
        service: "catalog-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn health() -> Json<HealthResponse> {
    health_response("healthy")
}

async fn ready(state: AppState) -> Result<Json<HealthResponse>, AppError> {
    // Readiness requires a live database connection
    state
        .repository
        .ping()
        .await
        .map_err(|e| AppError::ServiceUnavailable(format!("database unreachable: {e}")))?;

    Ok(health_response("ready"))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(move || ready(state)))
}
