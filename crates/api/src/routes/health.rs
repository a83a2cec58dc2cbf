//! Health check endpoint.
//!
//! ```text
//! GET /health -> health_check
//! ```

use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    version: &'static str,
}

/// GET /health -- liveness probe with current time and crate version.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health router (mounted at the root level, NOT under /api/v1).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
