//! Item page extraction: metadata plus download candidates.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::domain::entities::{DownloadCandidate, MovieDetails};
use crate::extraction::dedup::dedup_by_key;
use crate::extraction::markup::{Markup, Node};

const TITLE_SELECTOR: &str = ".entry-title, .sheader h1";
const OG_IMAGE_SELECTOR: &str = r#"meta[property="og:image"]"#;
const POSTER_SELECTOR: &str = ".poster img";
const DESCRIPTION_SELECTOR: &str = ".wp-content p, .description p";
const RATING_SELECTOR: &str = ".imdb-score, .rating";
const METADATA_SELECTOR: &str = ".custom_fields, .info-list li";

const DEFAULT_QUALITY: &str = "720p";
const NOT_AVAILABLE: &str = "N/A";

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());
static QUALITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\d+p").unwrap());
static SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+\.?\d*\s*(?:GB|MB)").unwrap());

/// Extracts metadata and deduplicated download candidates from an item page.
///
/// Missing pieces degrade to empty text or `"N/A"`; this never fails.
pub fn extract_details(html: &str) -> MovieDetails {
    let markup = Markup::parse(html);

    let title = first_text(&markup, TITLE_SELECTOR);
    let year = YEAR
        .find(&title)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let poster_url = markup
        .first(OG_IMAGE_SELECTOR)
        .and_then(|meta| meta.non_empty_attr("content"))
        .or_else(|| {
            markup
                .first(POSTER_SELECTOR)
                .and_then(|img| img.non_empty_attr("src"))
        })
        .map(str::to_string);

    let description = first_text(&markup, DESCRIPTION_SELECTOR);

    let rating = Some(first_text(&markup, RATING_SELECTOR))
        .filter(|rating| !rating.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let metadata = collect_metadata(&markup);
    let download_links = collect_candidates(&markup, &metadata);

    tracing::debug!(
        title = %title,
        links = download_links.len(),
        fields = metadata.len(),
        "Extracted item details"
    );

    MovieDetails {
        title,
        year,
        rating,
        description,
        poster_url,
        metadata,
        download_links,
    }
}

fn first_text(markup: &Markup, selector: &str) -> String {
    markup
        .first(selector)
        .map(|node| node.text())
        .unwrap_or_default()
}

/// `key: value` rows from the info list. Later duplicates overwrite earlier ones.
fn collect_metadata(markup: &Markup) -> BTreeMap<String, String> {
    markup
        .select(METADATA_SELECTOR)
        .iter()
        .filter_map(|node| {
            let text = node.text();
            let (key, value) = text.split_once(':')?;
            Some((key.trim().to_lowercase(), value.trim().to_string()))
        })
        .collect()
}

fn collect_candidates(
    markup: &Markup,
    metadata: &BTreeMap<String, String>,
) -> Vec<DownloadCandidate> {
    let candidates = markup
        .select("a")
        .into_iter()
        .filter_map(|anchor| candidate_from_anchor(&anchor, metadata));

    dedup_by_key(candidates, |candidate| candidate.countdown_url.clone())
}

fn candidate_from_anchor(
    anchor: &Node<'_>,
    metadata: &BTreeMap<String, String>,
) -> Option<DownloadCandidate> {
    let href = anchor.attr("href").unwrap_or_default();
    let text = anchor.text();
    let quality = QUALITY.find(&text).map(|m| m.as_str().to_string());

    let is_download_entry = href.contains("/api-") || href.contains("/links/") || quality.is_some();
    if !is_download_entry {
        return None;
    }

    let size = SIZE
        .find(&text)
        .map(|m| m.as_str().to_string())
        .or_else(|| metadata.get("size").cloned())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Some(DownloadCandidate {
        quality: quality.unwrap_or_else(|| DEFAULT_QUALITY.to_string()),
        size,
        countdown_url: href.to_string(),
    })
}
