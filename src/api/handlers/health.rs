//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthFailure, HealthResponse};
use crate::state::AppState;

/// Reports whether the target site is reachable.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Target answered with a success status within 5 seconds
/// - **503 Service Unavailable**: Target unreachable, timed out or returned an error status
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "engine": "cinesubz-scraper v0.1.0",
///   "status": "Online",
///   "latency": "142ms",
///   "target": "cinesubz.co"
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthFailure>)> {
    match state.catalog.probe_target().await {
        Ok(latency) => Ok(Json(HealthResponse {
            success: true,
            engine: concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION")).to_string(),
            status: "Online".to_string(),
            latency: format!("{}ms", latency.as_millis()),
            target: state.catalog.target_host().to_string(),
        })),
        Err(e) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthFailure {
                success: false,
                error: "Target unreachable".to_string(),
                message: e.message().to_string(),
            }),
        )),
    }
}
