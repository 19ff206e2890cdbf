//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`        - Target reachability check
//! - `GET /search`        - Keyword search
//! - `GET /details`       - Item details
//! - `GET /download`      - Download link resolution
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
