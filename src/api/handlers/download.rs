//! Handler for download link resolution endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::download::DownloadResponse;
use crate::api::dto::query::UrlParams;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a countdown page into final download links.
///
/// # Endpoint
///
/// `GET /download?url=<countdown page URL>`
///
/// A page without any usable link still answers 200 with `success: false`
/// and an empty `download_options` list.
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "count": 1,
///   "download_options": [
///     {
///       "type": "direct",
///       "label": "Sonic Cloud",
///       "download_url": "https://cloud.sonic-cloud.online/server1/file?ext=mp4"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed query string, or `url` missing or empty (no upstream fetch is made)
/// - **500 Internal Server Error**: Upstream fetch failed
pub async fn download_handler(
    State(state): State<AppState>,
    params: Result<Query<UrlParams>, QueryRejection>,
) -> Result<Json<DownloadResponse>, AppError> {
    let Query(params) = params?;
    let url = params.into_url()?;

    let links = state.catalog.download(&url).await?;

    Ok(Json(links.into()))
}
