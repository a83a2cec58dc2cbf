//! Devlog document model and validation.
//!
//! Defines the wire shapes of the devlog content document (projects and
//! their ordered posts) plus the derived projections handed to listing
//! and navigation code. The `core` crate does no I/O; the document is
//! fetched and cached elsewhere and queried through the pure functions
//! in [`crate::queries`].
//!
//! Wire names are camelCase and enum values are kebab-case to preserve
//! the published JSON document shape exactly.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Valid project status strings (wire values).
pub const PROJECT_STATUS_IN_PROGRESS: &str = "in-progress";
pub const PROJECT_STATUS_COMPLETED: &str = "completed";
pub const PROJECT_STATUS_ON_HOLD: &str = "on-hold";

/// All valid project status strings.
pub const VALID_PROJECT_STATUSES: &[&str] = &[
    PROJECT_STATUS_IN_PROGRESS,
    PROJECT_STATUS_COMPLETED,
    PROJECT_STATUS_ON_HOLD,
];

/// Valid post status strings (wire values).
pub const POST_STATUS_DRAFT: &str = "draft";
pub const POST_STATUS_PUBLISHED: &str = "published";

/// All valid post status strings.
pub const VALID_POST_STATUSES: &[&str] = &[POST_STATUS_DRAFT, POST_STATUS_PUBLISHED];

/// The fixed post tag vocabulary (wire values).
pub const VALID_POST_TAGS: &[&str] = &[
    "feature",
    "bug-fix",
    "milestone",
    "design",
    "refactor",
    "testing",
    "deployment",
    "documentation",
];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Lifecycle status of a devlog project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    /// Convert from a wire string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            PROJECT_STATUS_IN_PROGRESS => Ok(Self::InProgress),
            PROJECT_STATUS_COMPLETED => Ok(Self::Completed),
            PROJECT_STATUS_ON_HOLD => Ok(Self::OnHold),
            _ => Err(format!(
                "Invalid project status '{s}'. Must be one of: {}",
                VALID_PROJECT_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => PROJECT_STATUS_IN_PROGRESS,
            Self::Completed => PROJECT_STATUS_COMPLETED,
            Self::OnHold => PROJECT_STATUS_ON_HOLD,
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
        }
    }
}

/// Visibility state of a devlog post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    /// Convert from a wire string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            POST_STATUS_DRAFT => Ok(Self::Draft),
            POST_STATUS_PUBLISHED => Ok(Self::Published),
            _ => Err(format!(
                "Invalid post status '{s}'. Must be one of: {}",
                VALID_POST_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => POST_STATUS_DRAFT,
            Self::Published => POST_STATUS_PUBLISHED,
        }
    }
}

/// Category tag of a devlog post, drawn from a fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostTag {
    Feature,
    BugFix,
    Milestone,
    Design,
    Refactor,
    Testing,
    Deployment,
    Documentation,
}

impl PostTag {
    /// Convert from a wire string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "feature" => Ok(Self::Feature),
            "bug-fix" => Ok(Self::BugFix),
            "milestone" => Ok(Self::Milestone),
            "design" => Ok(Self::Design),
            "refactor" => Ok(Self::Refactor),
            "testing" => Ok(Self::Testing),
            "deployment" => Ok(Self::Deployment),
            "documentation" => Ok(Self::Documentation),
            _ => Err(format!(
                "Invalid post tag '{s}'. Must be one of: {}",
                VALID_POST_TAGS.join(", ")
            )),
        }
    }

    /// Convert to the wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::BugFix => "bug-fix",
            Self::Milestone => "milestone",
            Self::Design => "design",
            Self::Refactor => "refactor",
            Self::Testing => "testing",
            Self::Deployment => "deployment",
            Self::Documentation => "documentation",
        }
    }
}

// ---------------------------------------------------------------------------
// Document structs
// ---------------------------------------------------------------------------

/// A single devlog blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevlogPost {
    /// Unique within the parent project.
    pub id: String,
    pub title: String,
    /// Publication date (calendar date, no time component).
    pub date: NaiveDate,
    pub excerpt: String,
    /// Full body, markdown with occasional inline HTML.
    pub content: String,
    pub tags: Vec<PostTag>,
    pub status: PostStatus,

    /// Optional image references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    /// Precomputed reading time in minutes. When absent, estimate with
    /// [`crate::reading_time::estimate_reading_time`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
}

/// A project and its ordered devlog posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevlogProject {
    /// Unique within the document.
    pub id: String,
    pub title: String,
    pub summary: String,
    pub detailed_summary: String,

    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_end_date: Option<NaiveDate>,
    /// Not cross-validated against `status`; the document may carry a
    /// completion date on a project still marked in-progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<NaiveDate>,

    pub status: ProjectStatus,
    pub technologies: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,

    pub devlog_posts: Vec<DevlogPost>,
}

/// Root devlog document: an ordered collection of projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevlogDocument {
    pub projects: Vec<DevlogProject>,
}

// ---------------------------------------------------------------------------
// Derived projections
// ---------------------------------------------------------------------------

/// Lightweight projection of a project for listing views.
///
/// Derived fresh from a [`DevlogProject`] each time a listing is built;
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub status: ProjectStatus,
    pub technologies: Vec<String>,
    /// Count of published posts only.
    pub post_count: usize,
    /// Date of the latest published post, or `start_date` when there are
    /// no published posts.
    pub latest_post_date: NaiveDate,
    pub start_date: NaiveDate,
}

/// A post with its surrounding project context, for cross-project views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithContext {
    #[serde(flatten)]
    pub post: DevlogPost,
    pub project_id: String,
    pub project_title: String,
    pub project_status: ProjectStatus,
}

/// Immediate neighbours of a post by source-array position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacentPosts {
    pub previous: Option<DevlogPost>,
    pub next: Option<DevlogPost>,
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate document invariants: project ids unique within the document,
/// post ids unique within each project.
///
/// Tag vocabulary and status values are enforced earlier by
/// deserialization; this checks what the type system cannot.
pub fn validate_document(doc: &DevlogDocument) -> Result<(), CoreError> {
    let mut project_ids: HashSet<&str> = HashSet::new();

    for project in &doc.projects {
        if !project_ids.insert(&project.id) {
            return Err(CoreError::Validation(format!(
                "Duplicate project id '{}'",
                project.id
            )));
        }

        let mut post_ids: HashSet<&str> = HashSet::new();
        for post in &project.devlog_posts {
            if !post_ids.insert(&post.id) {
                return Err(CoreError::Validation(format!(
                    "Duplicate post id '{}' in project '{}'",
                    post.id, project.id
                )));
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
