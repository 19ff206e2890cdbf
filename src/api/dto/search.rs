//! DTOs for search endpoint.

use serde::Serialize;

use crate::domain::entities::SearchResult;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub count: usize,
    pub results: Vec<SearchResultItem>,
}

#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    pub rating: String,
    pub item_url: String,
}

impl From<SearchResult> for SearchResultItem {
    fn from(result: SearchResult) -> Self {
        Self {
            title: result.title,
            media_type: result.media_type.as_str(),
            poster_url: result.poster_url,
            rating: result.rating,
            item_url: result.item_url,
        }
    }
}

impl From<Vec<SearchResult>> for SearchResponse {
    fn from(results: Vec<SearchResult>) -> Self {
        let results: Vec<SearchResultItem> = results.into_iter().map(Into::into).collect();
        Self {
            success: true,
            count: results.len(),
            results,
        }
    }
}
