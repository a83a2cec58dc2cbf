//! Handlers for the static portfolio documents.
//!
//! These endpoints return the authored JSON byte-for-byte in meaning:
//! whatever fields the documents carry pass through, with no envelope,
//! exactly like a static file server with schema checking at startup.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/projects -- the portfolio project list, verbatim.
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.portfolio.projects().clone()))
}

/// GET /api/v1/skills -- the skill categories, verbatim.
pub async fn list_skills(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.portfolio.skills().clone()))
}

/// GET /api/v1/experience -- the experience timeline, verbatim.
pub async fn list_experience(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.portfolio.experience().clone()))
}
