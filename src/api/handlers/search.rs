//! Handler for search endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::query::SearchParams;
use crate::api::dto::search::SearchResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Searches the target site by keyword.
///
/// # Endpoint
///
/// `GET /search?q=<keyword>`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "count": 1,
///   "results": [
///     {
///       "title": "Spider-Man: No Way Home",
///       "type": "movie",
///       "poster_url": "https://cinesubz.co/wp-content/uploads/nwh.jpg",
///       "rating": "8.2",
///       "item_url": "https://cinesubz.co/movies/spiderman/"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed query string, or `q` missing or empty (no upstream fetch is made)
/// - **500 Internal Server Error**: Upstream fetch failed
pub async fn search_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Query(params) = params?;
    let query = params.into_query()?;

    let results = state.catalog.search(&query).await?;

    Ok(Json(results.into()))
}
