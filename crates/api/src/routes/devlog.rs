//! Devlog endpoints.
//!
//! ```text
//! GET  /projects                                -> devlog::list_projects
//! GET  /projects/{id}                           -> devlog::get_project
//! GET  /projects/{id}/posts                     -> devlog::list_posts
//! GET  /projects/{id}/posts/{post_id}           -> devlog::get_post
//! GET  /projects/{id}/posts/{post_id}/adjacent  -> devlog::adjacent_posts
//! GET  /projects/{id}/latest                    -> devlog::latest_post
//! GET  /projects/{id}/tags                      -> devlog::list_tags
//! GET  /posts                                   -> devlog::posts_by_tag
//! POST /refresh                                 -> devlog::refresh
//! ```

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::devlog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(devlog::list_projects))
        .route("/projects/{id}", get(devlog::get_project))
        .route("/projects/{id}/posts", get(devlog::list_posts))
        .route("/projects/{id}/posts/{post_id}", get(devlog::get_post))
        .route(
            "/projects/{id}/posts/{post_id}/adjacent",
            get(devlog::adjacent_posts),
        )
        .route("/projects/{id}/latest", get(devlog::latest_post))
        .route("/projects/{id}/tags", get(devlog::list_tags))
        .route("/posts", get(devlog::posts_by_tag))
        .route("/refresh", post(devlog::refresh))
}
