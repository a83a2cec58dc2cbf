//! Devlog document sources.
//!
//! [`DocumentFetcher`] abstracts where the devlog JSON document comes
//! from: an upstream HTTP endpoint in production, a local file during
//! development. The store is source-agnostic; swapping sources is a
//! configuration change.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use folio_core::devlog::DevlogDocument;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for devlog document loading failures.
///
/// `Clone` because a single in-flight fetch can have many waiters, and
/// every one of them receives the same outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request failed before a response arrived (network, DNS,
    /// timeout, unreadable file).
    #[error("Document request failed: {0}")]
    Request(String),

    /// The upstream endpoint returned a non-2xx status code.
    #[error("Document source returned HTTP {0}")]
    Status(u16),

    /// The payload was not a valid devlog document.
    #[error("Failed to decode devlog document: {0}")]
    Decode(String),

    /// The document decoded but violated an integrity invariant.
    #[error("Invalid devlog document: {0}")]
    Invalid(String),

    /// The load was aborted by shutdown.
    #[error("Document load cancelled")]
    Cancelled,
}

// ---------------------------------------------------------------------------
// DocumentFetcher
// ---------------------------------------------------------------------------

/// A source that can produce the full devlog document.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch and decode the document. Integrity validation happens in
    /// the store, not here.
    async fn fetch(&self) -> Result<DevlogDocument, FetchError>;
}

// ---------------------------------------------------------------------------
// HttpDocumentFetcher
// ---------------------------------------------------------------------------

/// Fetches the devlog document from an upstream HTTP endpoint.
pub struct HttpDocumentFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpDocumentFetcher {
    /// Create a fetcher with a pre-configured HTTP client.
    pub fn new(url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, url }
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self) -> Result<DevlogDocument, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .json::<DevlogDocument>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// FileDocumentFetcher
// ---------------------------------------------------------------------------

/// Reads the devlog document from a JSON file on disk.
pub struct FileDocumentFetcher {
    path: PathBuf,
}

impl FileDocumentFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentFetcher for FileDocumentFetcher {
    async fn fetch(&self) -> Result<DevlogDocument, FetchError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::Request(format!("{}: {e}", self.path.display())))?;

        serde_json::from_str(&raw).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
