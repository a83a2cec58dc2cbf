//! Handler for contact form submissions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use folio_core::contact::ContactMessage;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/contact -- validate a submission and relay it to the
/// configured form endpoint. Answers 202 on success; the relay call
/// completes before the response is sent.
pub async fn submit(
    State(state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> AppResult<impl IntoResponse> {
    message.validate()?;

    let relay = state.relay.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("Contact relay is not configured".to_string())
    })?;

    relay.submit(&message).await?;

    let id = Uuid::new_v4();
    tracing::info!(submission_id = %id, "Contact message accepted");

    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse {
            data: SubmissionAccepted { id, status: "sent" },
        }),
    ))
}

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// Receipt for an accepted submission.
#[derive(Debug, Serialize)]
pub struct SubmissionAccepted {
    pub id: Uuid,
    pub status: &'static str,
}
