//! Static portfolio document endpoints.
//!
//! ```text
//! GET /projects   -> portfolio::list_projects
//! GET /skills     -> portfolio::list_skills
//! GET /experience -> portfolio::list_experience
//! ```

use axum::{routing::get, Router};

use crate::handlers::portfolio;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(portfolio::list_projects))
        .route("/skills", get(portfolio::list_skills))
        .route("/experience", get(portfolio::list_experience))
}
