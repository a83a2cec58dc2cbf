use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_content::fetcher::DocumentFetcher;
use folio_content::{
    ContactRelay, DevlogStore, FileDocumentFetcher, HttpDocumentFetcher, PortfolioData,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();

    // --- Portfolio documents ---
    let portfolio = PortfolioData::load(&config.data_dir)
        .await
        .expect("Failed to load portfolio data");
    tracing::info!(dir = %config.data_dir.display(), "Portfolio documents loaded");

    // --- Devlog store ---
    let fetcher: Arc<dyn DocumentFetcher> = match &config.devlog_url {
        Some(url) => {
            tracing::info!(url = %url, "Devlog source: upstream HTTP");
            Arc::new(HttpDocumentFetcher::new(
                url.clone(),
                Duration::from_secs(config.fetch_timeout_secs),
            ))
        }
        None => {
            tracing::info!(path = %config.devlog_path.display(), "Devlog source: local file");
            Arc::new(FileDocumentFetcher::new(config.devlog_path.clone()))
        }
    };
    let shutdown_cancel = tokio_util::sync::CancellationToken::new();
    let devlog = DevlogStore::new(fetcher, shutdown_cancel.clone());

    // --- Contact relay ---
    let relay = config.contact_relay_url.as_ref().map(|url| {
        Arc::new(ContactRelay::new(
            url.clone(),
            Duration::from_secs(config.relay_timeout_secs),
        ))
    });
    if relay.is_none() {
        tracing::warn!("CONTACT_RELAY_URL not set, contact endpoint disabled");
    }

    // --- App state / router ---
    let state = AppState {
        devlog,
        portfolio: Arc::new(portfolio),
        relay,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    // Abort any devlog fetch still in flight.
    shutdown_cancel.cancel();

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
