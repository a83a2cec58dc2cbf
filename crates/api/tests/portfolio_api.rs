//! Integration tests for the static portfolio endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: GET /api/v1/projects returns the authored document verbatim
// ---------------------------------------------------------------------------

#[tokio::test]
async fn projects_returns_authored_document() {
    let app = common::build_test_app().await;
    let response = get(app, "/api/v1/projects").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    // Bare array, no envelope.
    assert!(json.is_array());
    assert_eq!(json[0]["title"], "Bird Gallery");
    assert_eq!(json[0]["status"], "Completed");

    // Fields outside the checked schema pass through untouched.
    assert_eq!(json[0]["featured"], true);
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/skills returns the skill categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn skills_returns_categories() {
    let app = common::build_test_app().await;
    let response = get(app, "/api/v1/skills").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    assert!(json.is_array());
    assert_eq!(json[0]["category"], "Languages");
    assert_eq!(json[0]["skills"][0]["name"], "Rust");
    assert_eq!(json[0]["skills"][0]["level"], 80);
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/experience returns the timeline entries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn experience_returns_timeline() {
    let app = common::build_test_app().await;
    let response = get(app, "/api/v1/experience").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    assert!(json.is_array());
    assert_eq!(json[0]["type"], "work");
    assert_eq!(json[0]["organization"], "Example Corp");

    // Display dates are free-form strings, served as authored.
    assert_eq!(json[0]["startDate"], "Jan 2023");
    assert_eq!(json[0]["endDate"], "Present");
}
