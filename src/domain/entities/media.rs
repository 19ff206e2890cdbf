//! Search result entity and media classification.

/// Kind of media an item page describes, derived from its URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    TvShow,
    Cartoon,
}

impl MediaType {
    /// Classifies an item URL by its path segment.
    ///
    /// `/tvshows/` wins over `/cartoons/`; anything else is a movie.
    pub fn from_item_url(item_url: &str) -> Self {
        if item_url.contains("/tvshows/") {
            Self::TvShow
        } else if item_url.contains("/cartoons/") {
            Self::Cartoon
        } else {
            Self::Movie
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::TvShow => "tvshow",
            Self::Cartoon => "cartoon",
        }
    }
}

/// A single entry scraped from the search results page.
///
/// `title` and `item_url` are never empty; the search extractor drops nodes
/// missing either of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub media_type: MediaType,
    pub poster_url: Option<String>,
    pub rating: String,
    pub item_url: String,
}
