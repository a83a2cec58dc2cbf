//! Pure queries and derivations over a loaded devlog document.
//!
//! Everything here is synchronous function composition over borrowed
//! document data: lookups by id, published/tag filtering, summary
//! derivation, adjacency navigation, and the listing controls (filter,
//! search, sort). The single asynchronous boundary of the system is the
//! initial document fetch, which lives outside this crate.
//!
//! Ordering discipline: queries preserve source order and never sort
//! implicitly. Sorting is a caller concern via the explicit `sort_*`
//! functions.

use crate::devlog::{
    AdjacentPosts, DevlogDocument, DevlogPost, DevlogProject, PostStatus, PostTag,
    PostWithContext, ProjectStatus, ProjectSummary,
};

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Exact-match project lookup by id. Absence is a normal outcome.
pub fn find_project<'a>(doc: &'a DevlogDocument, project_id: &str) -> Option<&'a DevlogProject> {
    doc.projects.iter().find(|p| p.id == project_id)
}

/// Exact-match post lookup by id within one project.
pub fn find_post<'a>(project: &'a DevlogProject, post_id: &str) -> Option<&'a DevlogPost> {
    project.devlog_posts.iter().find(|p| p.id == post_id)
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Published posts only, source order preserved.
pub fn published_posts(project: &DevlogProject) -> Vec<&DevlogPost> {
    filter_posts_by_status(&project.devlog_posts, PostStatus::Published)
}

/// Posts with the given status, source order preserved.
pub fn filter_posts_by_status(posts: &[DevlogPost], status: PostStatus) -> Vec<&DevlogPost> {
    posts.iter().filter(|p| p.status == status).collect()
}

/// Posts (draft and published) whose tag set contains `tag`, source order
/// preserved.
pub fn posts_by_tag(project: &DevlogProject, tag: PostTag) -> Vec<&DevlogPost> {
    project
        .devlog_posts
        .iter()
        .filter(|p| p.tags.contains(&tag))
        .collect()
}

/// Cross-project tag scan: every project in document order, every post in
/// project order. Drafts are included; a matching post appears exactly
/// once regardless of its other tags.
pub fn all_posts_by_tag(doc: &DevlogDocument, tag: PostTag) -> Vec<PostWithContext> {
    let mut matches = Vec::new();

    for project in &doc.projects {
        for post in &project.devlog_posts {
            if post.tags.contains(&tag) {
                matches.push(PostWithContext {
                    post: post.clone(),
                    project_id: project.id.clone(),
                    project_title: project.title.clone(),
                    project_status: project.status,
                });
            }
        }
    }

    matches
}

/// Distinct tags across a post collection, sorted by wire value.
pub fn unique_tags(posts: &[DevlogPost]) -> Vec<PostTag> {
    let mut tags: Vec<PostTag> = Vec::new();

    for post in posts {
        for tag in &post.tags {
            if !tags.contains(tag) {
                tags.push(*tag);
            }
        }
    }

    tags.sort_by_key(|t| t.as_str());
    tags
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

/// Derive the listing summary for one project.
///
/// `post_count` counts published posts only; `latest_post_date` is the
/// maximum date among them (first-encountered wins a tie), falling back
/// to the project's start date when no post is published.
pub fn project_summary(project: &DevlogProject) -> ProjectSummary {
    let published = published_posts(project);

    let latest_post_date = latest_published_post(project)
        .map(|p| p.date)
        .unwrap_or(project.start_date);

    ProjectSummary {
        id: project.id.clone(),
        title: project.title.clone(),
        summary: project.summary.clone(),
        status: project.status,
        technologies: project.technologies.clone(),
        post_count: published.len(),
        latest_post_date,
        start_date: project.start_date,
    }
}

/// The published post with the maximum date. Ties keep the
/// first-encountered post in source order.
pub fn latest_published_post(project: &DevlogProject) -> Option<&DevlogPost> {
    let mut latest: Option<&DevlogPost> = None;

    for post in project
        .devlog_posts
        .iter()
        .filter(|p| p.status == PostStatus::Published)
    {
        match latest {
            Some(current) if post.date > current.date => latest = Some(post),
            None => latest = Some(post),
            _ => {}
        }
    }

    latest
}

/// The immediate neighbours of a post by position in the unsorted,
/// unfiltered post collection. An unknown `post_id` yields both absent;
/// the first post has no previous and the last has no next.
pub fn adjacent_posts(project: &DevlogProject, post_id: &str) -> AdjacentPosts {
    let posts = &project.devlog_posts;

    let Some(index) = posts.iter().position(|p| p.id == post_id) else {
        return AdjacentPosts {
            previous: None,
            next: None,
        };
    };

    let previous = if index > 0 {
        Some(posts[index - 1].clone())
    } else {
        None
    };
    let next = if index + 1 < posts.len() {
        Some(posts[index + 1].clone())
    } else {
        None
    };

    AdjacentPosts { previous, next }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Copy of `posts` sorted by date descending (newest first). Stable.
pub fn sort_posts_by_date_desc(posts: &[DevlogPost]) -> Vec<DevlogPost> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Copy of `posts` sorted by date ascending (oldest first). Stable.
pub fn sort_posts_by_date_asc(posts: &[DevlogPost]) -> Vec<DevlogPost> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}

// ---------------------------------------------------------------------------
// Listing controls
// ---------------------------------------------------------------------------

/// Filter controls for the project listing view.
#[derive(Debug, Clone, Default)]
pub struct SummaryFilter {
    /// Keep only summaries with this status. `None` keeps all.
    pub status: Option<ProjectStatus>,
    /// Case-insensitive substring match over title, summary, and
    /// technologies. `None` or blank keeps all.
    pub search: Option<String>,
}

/// Sort order for the project listing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySort {
    /// Latest post date, newest first.
    Recent,
    /// Title, A to Z, case-insensitive.
    Title,
    /// Published post count, highest first.
    Posts,
}

impl SummarySort {
    /// Convert from a query string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "recent" => Ok(Self::Recent),
            "title" => Ok(Self::Title),
            "posts" => Ok(Self::Posts),
            _ => Err(format!(
                "Invalid sort '{s}'. Must be one of: recent, title, posts"
            )),
        }
    }
}

/// Apply a [`SummaryFilter`], preserving source order.
pub fn filter_summaries(summaries: &[ProjectSummary], filter: &SummaryFilter) -> Vec<ProjectSummary> {
    let query = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    summaries
        .iter()
        .filter(|s| match filter.status {
            Some(status) => s.status == status,
            None => true,
        })
        .filter(|s| match &query {
            Some(q) => {
                s.title.to_lowercase().contains(q)
                    || s.summary.to_lowercase().contains(q)
                    || s.technologies.iter().any(|t| t.to_lowercase().contains(q))
            }
            None => true,
        })
        .cloned()
        .collect()
}

/// Copy of `summaries` in the given [`SummarySort`] order. Stable.
pub fn sort_summaries(summaries: &[ProjectSummary], sort: SummarySort) -> Vec<ProjectSummary> {
    let mut sorted = summaries.to_vec();
    match sort {
        SummarySort::Recent => sorted.sort_by(|a, b| b.latest_post_date.cmp(&a.latest_post_date)),
        SummarySort::Title => {
            sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SummarySort::Posts => sorted.sort_by(|a, b| b.post_count.cmp(&a.post_count)),
    }
    sorted
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
