//! Handler for item details endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::details::DetailsResponse;
use crate::api::dto::query::UrlParams;
use crate::error::AppError;
use crate::state::AppState;

/// Extracts metadata and download candidates from an item page.
///
/// # Endpoint
///
/// `GET /details?url=<item page URL>`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "movie_info": {
///       "title": "Dune (2021)",
///       "year": "2021",
///       "rating": "8.0",
///       "description": "Paul Atreides...",
///       "metadata": { "genre": "Sci-Fi" }
///     },
///     "poster_url": "https://cinesubz.co/wp-content/uploads/dune.jpg",
///     "download_links": [
///       { "quality": "1080p", "size": "2.4GB", "countdown_url": "https://cinesubz.co/api-1080p/9" }
///     ]
///   }
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed query string, or `url` missing or empty (no upstream fetch is made)
/// - **500 Internal Server Error**: Upstream fetch failed
pub async fn details_handler(
    State(state): State<AppState>,
    params: Result<Query<UrlParams>, QueryRejection>,
) -> Result<Json<DetailsResponse>, AppError> {
    let Query(params) = params?;
    let url = params.into_url()?;

    let details = state.catalog.details(&url).await?;

    Ok(Json(details.into()))
}
