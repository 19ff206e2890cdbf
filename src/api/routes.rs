//! API route configuration.
//!
//! All operations are public, read-only `GET` endpoints.

use crate::api::handlers::{details_handler, download_handler, health_handler, search_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// The four scraper operations.
///
/// # Endpoints
///
/// - `GET /health`            - Target reachability and latency
/// - `GET /search?q=`         - Keyword search
/// - `GET /details?url=`      - Item metadata and download candidates
/// - `GET /download?url=`     - Countdown page resolution into final links
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/search", get(search_handler))
        .route("/details", get(details_handler))
        .route("/download", get(download_handler))
}
