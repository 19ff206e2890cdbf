//! DTOs for health check endpoint.

use serde::Serialize;

/// Reachability report when the target answered in time.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub success: bool,
    /// `<package> v<version>`
    pub engine: String,
    pub status: String,
    /// Round-trip time of the probe, e.g. `"142ms"`.
    pub latency: String,
    pub target: String,
}

/// Body of the 503 response.
#[derive(Debug, Serialize)]
pub struct HealthFailure {
    pub success: bool,
    pub error: String,
    /// Underlying transport or status message.
    pub message: String,
}
