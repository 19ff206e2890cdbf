//! Search results page extraction.

use crate::domain::entities::{MediaType, SearchResult};
use crate::extraction::markup::{Markup, Node};

const ITEM_SELECTOR: &str = ".item-box, .result-item, .display-item, article";
const TITLE_SELECTOR: &str = "h1, h2, h3, .title";
const RATING_SELECTOR: &str = ".imdb-score, .rating";

/// Turns a search results page into typed results, in document order.
///
/// Nodes without a title or a link are skipped. Never fails: a page with
/// an unexpected layout simply yields no results.
pub fn extract_search(html: &str) -> Vec<SearchResult> {
    let markup = Markup::parse(html);
    let results: Vec<_> = markup
        .select(ITEM_SELECTOR)
        .iter()
        .filter_map(search_result_from_node)
        .collect();

    tracing::debug!(count = results.len(), "Extracted search results");
    results
}

fn search_result_from_node(node: &Node<'_>) -> Option<SearchResult> {
    let title = node
        .first(TITLE_SELECTOR)
        .map(|title| title.text())
        .unwrap_or_default();
    let item_url = node
        .first("a")
        .and_then(|anchor| anchor.attr("href"))
        .unwrap_or_default();

    if title.is_empty() || item_url.is_empty() {
        return None;
    }

    let poster_url = node.first("img").and_then(|img| {
        img.non_empty_attr("src")
            .or_else(|| img.non_empty_attr("data-src"))
            .map(str::to_string)
    });

    let rating = node
        .first(RATING_SELECTOR)
        .map(|rating| rating.text())
        .filter(|rating| !rating.is_empty())
        .unwrap_or_else(|| "N/A".to_string());

    Some(SearchResult {
        title,
        media_type: MediaType::from_item_url(item_url),
        poster_url,
        rating,
        item_url: item_url.to_string(),
    })
}
