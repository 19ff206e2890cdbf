//! Item page entity with its download candidates.

use std::collections::BTreeMap;

/// Metadata scraped from an item (movie, episode or cartoon) page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieDetails {
    pub title: String,
    /// First four-digit run in the title, or `"N/A"`.
    pub year: String,
    pub rating: String,
    pub description: String,
    pub poster_url: Option<String>,
    /// Lower-cased keys from the page's info list (`"size"`, `"genre"`, ...).
    pub metadata: BTreeMap<String, String>,
    /// Unique by `countdown_url`, in document order.
    pub download_links: Vec<DownloadCandidate>,
}

/// A quality option pointing at a countdown/redirect page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCandidate {
    pub quality: String,
    pub size: String,
    pub countdown_url: String,
}
