//! Contact form endpoint.
//!
//! ```text
//! POST /contact -> contact::submit
//! ```

use axum::{routing::post, Router};

use crate::handlers::contact;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(contact::submit))
}
