//! Contact form submission model.
//!
//! Submissions are validated before being relayed to the configured
//! delivery service. `subject` is optional; the remaining fields are
//! required and bounded below.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// A contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Email address is not valid"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
