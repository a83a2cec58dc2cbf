//! Application error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_content::{FetchError, RelayError};
use folio_core::CoreError;
use serde_json::json;

/// Errors a request handler can produce.
///
/// Every variant maps to a status code and a stable machine-readable
/// `code` string in [`IntoResponse`]; handlers never build error
/// responses by hand.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error from the core layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The devlog document could not be loaded from its source.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The contact relay rejected or never received a submission.
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// Contact input failed field validation.
    #[error(transparent)]
    Validation(#[from] validator::ValidationErrors),

    /// Malformed request input (unknown filter values and the like).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A required integration is not configured.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Anything unexpected. The message is logged, not sent to clients.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),
            AppError::Core(CoreError::Validation(message)) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                message.clone(),
            ),
            AppError::Fetch(e) => {
                tracing::error!(error = %e, "Devlog document unavailable");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The devlog source could not be reached".to_string(),
                )
            }
            AppError::Relay(e) => {
                tracing::error!(error = %e, "Contact relay failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "RELAY_ERROR",
                    "The contact message could not be delivered".to_string(),
                )
            }
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                errors.to_string(),
            ),
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.clone())
            }
            AppError::ServiceUnavailable(message) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                message.clone(),
            ),
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Convenience alias used by all handlers.
pub type AppResult<T> = Result<T, AppError>;
