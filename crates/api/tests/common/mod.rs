use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_content::fetcher::{DocumentFetcher, FetchError};
use folio_content::{ContactRelay, DevlogStore, PortfolioData};
use folio_core::devlog::{
    DevlogDocument, DevlogPost, DevlogProject, PostStatus, PostTag, ProjectStatus,
};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:4200` as CORS origin (matching the dev
/// default) and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4200".to_string()],
        request_timeout_secs: 30,
        devlog_url: None,
        devlog_path: "data/devlogs.json".into(),
        fetch_timeout_secs: 10,
        data_dir: "data".into(),
        contact_relay_url: None,
        relay_timeout_secs: 10,
    }
}

// ---------------------------------------------------------------------------
// Devlog fixture
// ---------------------------------------------------------------------------

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn post(id: &str, day: u32, status: PostStatus, tags: Vec<PostTag>) -> DevlogPost {
    DevlogPost {
        id: id.to_string(),
        title: format!("Post {id}"),
        date: date(2024, 1, day),
        excerpt: "excerpt".to_string(),
        content: "content".to_string(),
        tags,
        status,
        images: None,
        reading_time: None,
    }
}

pub fn project(id: &str, posts: Vec<DevlogPost>) -> DevlogProject {
    DevlogProject {
        id: id.to_string(),
        title: format!("Project {id}"),
        summary: "summary".to_string(),
        detailed_summary: "detailed summary".to_string(),
        start_date: date(2024, 1, 1),
        expected_end_date: None,
        completion_date: None,
        status: ProjectStatus::InProgress,
        technologies: vec!["Rust".to_string()],
        repository: None,
        live_url: None,
        devlog_posts: posts,
    }
}

/// Two projects: `p1` with published posts `a`, `c` and draft `b` (in
/// that source order), `p2` completed with no posts.
pub fn sample_document() -> DevlogDocument {
    let mut p2 = project("p2", vec![]);
    p2.status = ProjectStatus::Completed;
    p2.completion_date = Some(date(2024, 3, 1));

    DevlogDocument {
        projects: vec![
            project(
                "p1",
                vec![
                    post("a", 1, PostStatus::Published, vec![PostTag::Feature]),
                    post("b", 3, PostStatus::Draft, vec![PostTag::Design]),
                    post("c", 2, PostStatus::Published, vec![PostTag::Feature]),
                ],
            ),
            p2,
        ],
    }
}

/// Fixed-outcome document source.
pub struct StaticFetcher {
    result: Result<DevlogDocument, FetchError>,
}

impl StaticFetcher {
    pub fn ok(document: DevlogDocument) -> Self {
        Self {
            result: Ok(document),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl DocumentFetcher for StaticFetcher {
    async fn fetch(&self) -> Result<DevlogDocument, FetchError> {
        self.result.clone()
    }
}

// ---------------------------------------------------------------------------
// Portfolio fixture
// ---------------------------------------------------------------------------

const PROJECTS_JSON: &str = r#"[{
    "id": 1,
    "title": "Bird Gallery",
    "description": "Photo gallery with species tagging.",
    "technologies": ["Angular", "Firebase"],
    "link": "https://example.com/gallery",
    "thumbnail": "assets/images/gallery.png",
    "status": "Completed",
    "category": "Web",
    "featured": true
}]"#;

const SKILLS_JSON: &str = r#"[
    {"category": "Languages", "skills": [{"name": "Rust", "level": 80}]}
]"#;

const EXPERIENCE_JSON: &str = r#"[{
    "id": 1,
    "type": "work",
    "title": "Software Engineer",
    "organization": "Example Corp",
    "location": "Remote",
    "startDate": "Jan 2023",
    "endDate": "Present",
    "description": "Backend services.",
    "technologies": ["Rust", "Postgres"]
}]"#;

/// Load the portfolio fixture through the real loader, including its
/// startup shape check.
pub async fn test_portfolio() -> PortfolioData {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("projects.json"), PROJECTS_JSON).expect("write projects");
    std::fs::write(dir.path().join("skills.json"), SKILLS_JSON).expect("write skills");
    std::fs::write(dir.path().join("experience.json"), EXPERIENCE_JSON).expect("write experience");

    PortfolioData::load(dir.path())
        .await
        .expect("load portfolio fixture")
}

// ---------------------------------------------------------------------------
// App assembly
// ---------------------------------------------------------------------------

/// Build the application with the standard fixture document and no
/// contact relay.
pub async fn build_test_app() -> Router {
    build_app_with(StaticFetcher::ok(sample_document()), None).await
}

/// Build the application with a custom document source and an optional
/// contact relay endpoint.
///
/// This goes through [`build_app_router`] so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub async fn build_app_with(fetcher: StaticFetcher, relay_url: Option<String>) -> Router {
    let config = test_config();
    let devlog = DevlogStore::new(Arc::new(fetcher), CancellationToken::new());
    let relay = relay_url.map(|url| Arc::new(ContactRelay::new(url, Duration::from_secs(2))));

    let state = AppState {
        devlog,
        portfolio: Arc::new(test_portfolio().await),
        relay,
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    app.oneshot(request).await.expect("response")
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    app.oneshot(request).await.expect("response")
}

/// Send a bodyless POST request to the app.
pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    app.oneshot(request).await.expect("response")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("JSON body")
}
