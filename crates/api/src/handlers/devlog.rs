//! Handlers for devlog projects and posts.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use folio_core::devlog::{DevlogProject, PostTag, ProjectStatus};
use folio_core::queries::{self, SummaryFilter, SummarySort};
use folio_core::reading_time::estimate_reading_time;
use folio_core::{progress, CoreError};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/devlog/projects -- project summaries.
///
/// Supports `?status=` (project status), `?search=` (substring over
/// title and description) and `?sort=recent|title|posts`. Without
/// `sort` the document order is kept.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<SummaryListQuery>,
) -> AppResult<impl IntoResponse> {
    let status = query
        .status
        .as_deref()
        .map(ProjectStatus::from_str_value)
        .transpose()
        .map_err(AppError::BadRequest)?;
    let sort = query
        .sort
        .as_deref()
        .map(SummarySort::from_str_value)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let summaries = state.devlog.list_summaries().await?;
    let filter = SummaryFilter {
        status,
        search: query.search,
    };
    let filtered = queries::filter_summaries(&summaries, &filter);
    let data = match sort {
        Some(sort) => queries::sort_summaries(&filtered, sort),
        None => filtered,
    };

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/devlog/projects/{id} -- one project with its current
/// completion percentage.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = state
        .devlog
        .get_project(&id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Project",
            id: id.clone(),
        })?;

    let progress = progress::project_progress(&project);

    Ok(Json(DataResponse {
        data: ProjectDetail { project, progress },
    }))
}

/// GET /api/v1/devlog/projects/{id}/posts -- posts of one project.
///
/// `?status=published` (default) or `?status=all`. `?tag=` switches to
/// a tag scan, which includes drafts regardless of `status`. An
/// unknown project yields an empty list.
pub async fn list_posts(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PostListQuery>,
) -> AppResult<impl IntoResponse> {
    let data = match query.tag.as_deref() {
        Some(raw) => {
            let tag = PostTag::from_str_value(raw).map_err(AppError::BadRequest)?;
            state.devlog.list_posts_by_tag(&id, tag).await?
        }
        None => match query.status.as_deref() {
            None | Some("published") => state.devlog.list_published_posts(&id).await?,
            Some("all") => state.devlog.list_all_posts(&id).await?,
            Some(other) => {
                return Err(AppError::BadRequest(format!(
                    "Invalid status filter: {other}"
                )))
            }
        },
    };

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/devlog/projects/{id}/posts/{post_id} -- a single post.
///
/// `readingTime` is filled from the content estimator when the
/// document does not carry it.
pub async fn get_post(
    State(state): State<AppState>,
    Path((id, post_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let mut post = state
        .devlog
        .get_post(&id, &post_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Post",
            id: post_id.clone(),
        })?;

    if post.reading_time.is_none() {
        post.reading_time = Some(estimate_reading_time(&post.content));
    }

    Ok(Json(DataResponse { data: post }))
}

/// GET /api/v1/devlog/projects/{id}/posts/{post_id}/adjacent --
/// positional neighbours of a post. Unknown project or post yields
/// both sides absent rather than an error.
pub async fn adjacent_posts(
    State(state): State<AppState>,
    Path((id, post_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let data = state.devlog.adjacent_posts(&id, &post_id).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/devlog/projects/{id}/latest -- the latest published
/// post, or `null` when the project has none.
pub async fn latest_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if state.devlog.get_project(&id).await?.is_none() {
        return Err(CoreError::NotFound {
            entity: "Project",
            id,
        }
        .into());
    }

    let data = state.devlog.latest_post(&id).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/devlog/projects/{id}/tags -- sorted unique tags across
/// all posts of a project, drafts included.
pub async fn list_tags(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let data = state.devlog.project_tags(&id).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/devlog/posts?tag= -- every post carrying a tag, across
/// all projects, with its project context attached.
pub async fn posts_by_tag(
    State(state): State<AppState>,
    Query(query): Query<TagQuery>,
) -> AppResult<impl IntoResponse> {
    let raw = query
        .tag
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("Missing required query parameter: tag".into()))?;
    let tag = PostTag::from_str_value(raw).map_err(AppError::BadRequest)?;

    let data = state.devlog.list_all_posts_by_tag(tag).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/devlog/refresh -- drop the cached document so the next
/// read fetches a fresh copy.
pub async fn refresh(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.devlog.invalidate_cache().await;
    Ok(Json(DataResponse {
        data: RefreshStatus {
            status: "refreshed",
        },
    }))
}

// ---------------------------------------------------------------------------
// Request / response payloads
// ---------------------------------------------------------------------------

/// Query parameters for the summary listing.
#[derive(Debug, Deserialize)]
pub struct SummaryListQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

/// Query parameters for the post listing of one project.
#[derive(Debug, Deserialize)]
pub struct PostListQuery {
    pub status: Option<String>,
    pub tag: Option<String>,
}

/// Query parameters for the cross-project tag scan.
#[derive(Debug, Deserialize)]
pub struct TagQuery {
    pub tag: Option<String>,
}

/// A project as stored, plus its schedule-derived completion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: DevlogProject,
    pub progress: u8,
}

#[derive(Debug, Serialize)]
pub struct RefreshStatus {
    pub status: &'static str,
}
