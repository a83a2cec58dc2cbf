//! Shared application state.

use std::sync::Arc;

use folio_content::{ContactRelay, DevlogStore, PortfolioData};

use crate::config::ServerConfig;

/// State handed to every handler through `State<AppState>`.
///
/// Cloning is cheap; all fields are shared handles.
#[derive(Clone)]
pub struct AppState {
    /// Cached devlog document and its query methods.
    pub devlog: Arc<DevlogStore>,
    /// Static portfolio documents loaded at startup.
    pub portfolio: Arc<PortfolioData>,
    /// Outbound contact relay. `None` disables the contact endpoint.
    pub relay: Option<Arc<ContactRelay>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
