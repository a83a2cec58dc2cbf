//! Server configuration loaded from environment variables.

use std::path::PathBuf;

/// Runtime configuration for the API server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the server binds to.
    pub host: String,
    /// Port the server listens on.
    pub port: u16,
    /// Origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Per-request timeout applied by the timeout layer.
    pub request_timeout_secs: u64,
    /// Upstream URL of the devlog document. When unset the document is
    /// served from [`devlog_path`](Self::devlog_path) instead.
    pub devlog_url: Option<String>,
    /// Local path of the devlog document, used when no URL is set.
    pub devlog_path: PathBuf,
    /// Timeout for a single devlog fetch.
    pub fetch_timeout_secs: u64,
    /// Directory holding the static portfolio documents
    /// (projects.json, skills.json, experience.json).
    pub data_dir: PathBuf,
    /// Endpoint contact submissions are relayed to. When unset the
    /// contact endpoint answers 503.
    pub contact_relay_url: Option<String>,
    /// Timeout for a single relay submission.
    pub relay_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// | Variable               | Default                 |
    /// |------------------------|-------------------------|
    /// | `HOST`                 | `0.0.0.0`               |
    /// | `PORT`                 | `3000`                  |
    /// | `CORS_ORIGINS`         | `http://localhost:4200` |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                    |
    /// | `DEVLOG_URL`           | unset (serve from file) |
    /// | `DEVLOG_PATH`          | `data/devlogs.json`     |
    /// | `FETCH_TIMEOUT_SECS`   | `10`                    |
    /// | `DATA_DIR`             | `data`                  |
    /// | `CONTACT_RELAY_URL`    | unset (contact off)     |
    /// | `RELAY_TIMEOUT_SECS`   | `10`                    |
    ///
    /// `CORS_ORIGINS` is a comma-separated list. Panics when a numeric
    /// variable does not parse; the server cannot start half-configured.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:4200".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let devlog_url = std::env::var("DEVLOG_URL").ok().filter(|s| !s.is_empty());

        let devlog_path =
            PathBuf::from(std::env::var("DEVLOG_PATH").unwrap_or_else(|_| "data/devlogs.json".into()));

        let fetch_timeout_secs = std::env::var("FETCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("FETCH_TIMEOUT_SECS must be a valid u64");

        let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into()));

        let contact_relay_url = std::env::var("CONTACT_RELAY_URL").ok().filter(|s| !s.is_empty());

        let relay_timeout_secs = std::env::var("RELAY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("RELAY_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            devlog_url,
            devlog_path,
            fetch_timeout_secs,
            data_dir,
            contact_relay_url,
            relay_timeout_secs,
        }
    }
}
