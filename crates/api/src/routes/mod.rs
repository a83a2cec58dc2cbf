//! Route registration.
//!
//! Route hierarchy under `/api/v1`:
//!
//! ```text
//! /projects                                     portfolio projects, verbatim (GET)
//! /skills                                       skill categories, verbatim (GET)
//! /experience                                   experience timeline, verbatim (GET)
//!
//! /devlog/projects                              project summaries (?status, ?search, ?sort)
//! /devlog/projects/{id}                         project detail with progress
//! /devlog/projects/{id}/posts                   posts (?status=published|all, ?tag)
//! /devlog/projects/{id}/posts/{post_id}         single post
//! /devlog/projects/{id}/posts/{post_id}/adjacent  previous/next neighbours
//! /devlog/projects/{id}/latest                  latest published post
//! /devlog/projects/{id}/tags                    tags in use
//! /devlog/posts                                 cross-project tag scan (?tag)
//! /devlog/refresh                               drop the document cache (POST)
//!
//! /contact                                      relay a message (POST)
//! ```
//!
//! The health probe lives in [`health`] and is mounted at the server
//! root, outside the versioned prefix.

pub mod contact;
pub mod devlog;
pub mod health;
pub mod portfolio;

use axum::Router;

use crate::state::AppState;

/// Assemble the `/api/v1` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(portfolio::router())
        .nest("/devlog", devlog::router())
        .merge(contact::router())
}
