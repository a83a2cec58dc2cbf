//! Cached devlog document store with request coalescing.
//!
//! [`DevlogStore`] owns the single in-memory copy of the devlog
//! document. The first query triggers a fetch through the configured
//! [`DocumentFetcher`]; queries that arrive while that fetch is in
//! flight share the same future instead of issuing duplicate upstream
//! requests. A successful fetch is cached until
//! [`DevlogStore::invalidate_cache`] is called; a failed fetch leaves
//! the cache empty so the next query retries.

use std::sync::Arc;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use folio_core::devlog::{
    self, AdjacentPosts, DevlogDocument, DevlogPost, DevlogProject, PostTag, PostWithContext,
    ProjectSummary,
};
use folio_core::queries;

use crate::fetcher::{DocumentFetcher, FetchError};

/// Outcome of a document load, handed to every coalesced waiter.
type LoadResult = Result<Arc<DevlogDocument>, FetchError>;

/// In-flight fetch future shared by all waiters.
type SharedLoad = Shared<BoxFuture<'static, LoadResult>>;

// ---------------------------------------------------------------------------
// Cache slot
// ---------------------------------------------------------------------------

/// State of the single document cache slot.
enum CacheSlot {
    /// Nothing cached, no fetch running.
    Empty,
    /// A fetch is in flight; new callers join it.
    Loading(SharedLoad),
    /// A validated document is cached.
    Ready(Arc<DevlogDocument>),
}

// ---------------------------------------------------------------------------
// DevlogStore
// ---------------------------------------------------------------------------

/// Cached, coalescing access to the devlog document.
///
/// Created once at application startup. The returned `Arc` can be
/// cheaply cloned into Axum state.
pub struct DevlogStore {
    fetcher: Arc<dyn DocumentFetcher>,
    slot: Mutex<CacheSlot>,
    /// Cancelled during shutdown -- in-flight loads abort with
    /// [`FetchError::Cancelled`].
    cancel: CancellationToken,
}

impl DevlogStore {
    /// Create a store backed by the given document source.
    ///
    /// The cancellation token is supplied by the process owner and
    /// cancelled during shutdown.
    pub fn new(fetcher: Arc<dyn DocumentFetcher>, cancel: CancellationToken) -> Arc<Self> {
        Arc::new(Self {
            fetcher,
            slot: Mutex::new(CacheSlot::Empty),
            cancel,
        })
    }

    /// Load the devlog document, fetching it if not cached.
    ///
    /// Concurrent callers share a single upstream fetch and receive the
    /// same document or the same error. Failures are not cached; the
    /// next call fetches again.
    pub async fn load_all(&self) -> LoadResult {
        let load = {
            let mut slot = self.slot.lock().await;
            match &*slot {
                CacheSlot::Ready(document) => return Ok(Arc::clone(document)),
                CacheSlot::Loading(load) => load.clone(),
                CacheSlot::Empty => {
                    let load = start_load(Arc::clone(&self.fetcher), self.cancel.clone());
                    *slot = CacheSlot::Loading(load.clone());
                    load
                }
            }
        };

        let result = load.clone().await;

        // Record the outcome, unless the slot has moved on (explicit
        // invalidation, or a newer load already owns it).
        let mut slot = self.slot.lock().await;
        if let CacheSlot::Loading(current) = &*slot {
            if current.ptr_eq(&load) {
                *slot = match &result {
                    Ok(document) => CacheSlot::Ready(Arc::clone(document)),
                    Err(_) => CacheSlot::Empty,
                };
            }
        }
        result
    }

    /// Drop the cached document.
    ///
    /// The next query fetches fresh data. A load already in flight
    /// still resolves for its waiters but no longer populates the
    /// cache.
    pub async fn invalidate_cache(&self) {
        let mut slot = self.slot.lock().await;
        *slot = CacheSlot::Empty;
        tracing::info!("Devlog cache invalidated");
    }

    /// Look up a project by id. Absence is `Ok(None)`.
    pub async fn get_project(&self, project_id: &str) -> Result<Option<DevlogProject>, FetchError> {
        let document = self.load_all().await?;
        Ok(queries::find_project(&document, project_id).cloned())
    }

    /// Look up a single post within a project. An absent project has no
    /// posts.
    pub async fn get_post(
        &self,
        project_id: &str,
        post_id: &str,
    ) -> Result<Option<DevlogPost>, FetchError> {
        let document = self.load_all().await?;
        Ok(queries::find_project(&document, project_id)
            .and_then(|project| queries::find_post(project, post_id))
            .cloned())
    }

    /// Whether a project exists and has at least one post, drafts
    /// included.
    pub async fn has_devlog(&self, project_id: &str) -> Result<bool, FetchError> {
        let document = self.load_all().await?;
        Ok(queries::find_project(&document, project_id)
            .is_some_and(|project| !project.devlog_posts.is_empty()))
    }

    /// One summary per project, in document order. Callers sort and
    /// filter.
    pub async fn list_summaries(&self) -> Result<Vec<ProjectSummary>, FetchError> {
        let document = self.load_all().await?;
        Ok(document.projects.iter().map(queries::project_summary).collect())
    }

    /// Published posts of a project, source order. An absent project
    /// yields an empty list.
    pub async fn list_published_posts(
        &self,
        project_id: &str,
    ) -> Result<Vec<DevlogPost>, FetchError> {
        let document = self.load_all().await?;
        Ok(queries::find_project(&document, project_id)
            .map(|project| {
                queries::published_posts(project)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    /// All posts of a project including drafts, source order.
    pub async fn list_all_posts(&self, project_id: &str) -> Result<Vec<DevlogPost>, FetchError> {
        let document = self.load_all().await?;
        Ok(queries::find_project(&document, project_id)
            .map(|project| project.devlog_posts.clone())
            .unwrap_or_default())
    }

    /// Posts of a project carrying the given tag, drafts included.
    pub async fn list_posts_by_tag(
        &self,
        project_id: &str,
        tag: PostTag,
    ) -> Result<Vec<DevlogPost>, FetchError> {
        let document = self.load_all().await?;
        Ok(queries::find_project(&document, project_id)
            .map(|project| {
                queries::posts_by_tag(project, tag)
                    .into_iter()
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Cross-project tag scan, drafts included. Document order, then
    /// post order.
    pub async fn list_all_posts_by_tag(
        &self,
        tag: PostTag,
    ) -> Result<Vec<PostWithContext>, FetchError> {
        let document = self.load_all().await?;
        Ok(queries::all_posts_by_tag(&document, tag))
    }

    /// Neighbours of a post by position in the unfiltered collection.
    pub async fn adjacent_posts(
        &self,
        project_id: &str,
        post_id: &str,
    ) -> Result<AdjacentPosts, FetchError> {
        let document = self.load_all().await?;
        Ok(queries::find_project(&document, project_id)
            .map(|project| queries::adjacent_posts(project, post_id))
            .unwrap_or(AdjacentPosts {
                previous: None,
                next: None,
            }))
    }

    /// Most recent published post of a project, if any.
    pub async fn latest_post(&self, project_id: &str) -> Result<Option<DevlogPost>, FetchError> {
        let document = self.load_all().await?;
        Ok(queries::find_project(&document, project_id)
            .and_then(queries::latest_published_post)
            .cloned())
    }

    /// Sorted, deduplicated tags used across a project's posts.
    pub async fn project_tags(&self, project_id: &str) -> Result<Vec<PostTag>, FetchError> {
        let document = self.load_all().await?;
        Ok(queries::find_project(&document, project_id)
            .map(|project| queries::unique_tags(&project.devlog_posts))
            .unwrap_or_default())
    }
}

/// Build the shared fetch future: fetch, validate, wrap in `Arc`.
fn start_load(fetcher: Arc<dyn DocumentFetcher>, cancel: CancellationToken) -> SharedLoad {
    async move {
        let document = tokio::select! {
            result = fetcher.fetch() => result,
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
        }
        .map_err(|e| {
            tracing::warn!(error = %e, "Devlog document load failed");
            e
        })?;

        devlog::validate_document(&document).map_err(|e| {
            tracing::warn!(error = %e, "Devlog document failed validation");
            FetchError::Invalid(e.to_string())
        })?;

        tracing::info!(projects = document.projects.len(), "Devlog document loaded");
        Ok(Arc::new(document))
    }
    .boxed()
    .shared()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
