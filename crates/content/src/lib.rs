//! Content loading and delivery for the portfolio backend.
//!
//! This crate is the I/O layer between the pure domain logic in
//! `folio-core` and the HTTP surface in `folio-api`:
//!
//! - [`DevlogStore`] -- cached, request-coalescing access to the devlog
//!   document.
//! - [`fetcher`] -- document sources (upstream HTTP, local file).
//! - [`PortfolioData`] -- startup-loaded static content catalog
//!   (projects, skills, experience), served verbatim.
//! - [`ContactRelay`] -- outbound delivery of contact form submissions.

pub mod fetcher;
pub mod portfolio;
pub mod relay;
pub mod store;

pub use fetcher::{DocumentFetcher, FetchError, FileDocumentFetcher, HttpDocumentFetcher};
pub use portfolio::{CatalogError, PortfolioData};
pub use relay::{ContactRelay, RelayError};
pub use store::DevlogStore;
