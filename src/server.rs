//! HTTP server initialization and runtime setup.
//!
//! Builds the fetch client and catalog service, then runs the Axum server
//! until Ctrl-C or SIGTERM.

use crate::application::services::CatalogService;
use crate::config::Config;
use crate::infrastructure::http::ReqwestFetcher;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared application state for `config`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the target base URL
/// is invalid.
pub fn build_state(config: &Config) -> Result<AppState> {
    let fetcher = ReqwestFetcher::new(&config.target_base_url)
        .context("Failed to build upstream HTTP client")?;

    let catalog = CatalogService::new(
        Arc::new(fetcher),
        &config.target_base_url,
        config.fetch_timeout(),
    )?;

    Ok(AppState::new(Arc::new(catalog)))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!(target_url = %config.target_base_url, "Catalog service ready");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
