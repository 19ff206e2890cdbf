//! Catalog operations: fetch a page from the target site and run the matching extractor.

use std::sync::Arc;
use std::time::{Duration, Instant};

use url::Url;

use crate::domain::entities::{MovieDetails, ResolvedLink, SearchResult};
use crate::domain::fetcher::PageFetcher;
use crate::error::AppError;
use crate::extraction::{extract_details, extract_search, resolve_links};

/// Upstream timeout of the health probe. Not configurable.
pub const HEALTH_TIMEOUT: Duration = Duration::from_millis(5000);

/// Service behind the four public operations.
///
/// Each call performs at most one outbound fetch and one parse pass. There is
/// no retry, caching or shared mutable state; the service is freely shared
/// across concurrent requests.
pub struct CatalogService {
    fetcher: Arc<dyn PageFetcher>,
    base_url: Url,
    fetch_timeout: Duration,
}

impl CatalogService {
    /// Creates a catalog service for the site rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if `base_url` is not an absolute URL.
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        base_url: &str,
        fetch_timeout: Duration,
    ) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::internal(format!("Invalid target base URL: {e}")))?;

        Ok(Self {
            fetcher,
            base_url,
            fetch_timeout,
        })
    }

    /// Host name reported by the health operation (e.g. `cinesubz.co`).
    pub fn target_host(&self) -> &str {
        self.base_url.host_str().unwrap_or_default()
    }

    /// Fetches the site root and returns the round-trip latency.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the site does not answer with a
    /// success status within [`HEALTH_TIMEOUT`].
    pub async fn probe_target(&self) -> Result<Duration, AppError> {
        let started = Instant::now();
        self.fetch_page(self.base_url.as_str(), HEALTH_TIMEOUT).await?;
        Ok(started.elapsed())
    }

    /// Runs a keyword search on the target site.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on fetch failure. An empty result list
    /// is a success.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, AppError> {
        let url = self.search_url(query);
        let html = self.fetch_page(url.as_str(), self.fetch_timeout).await?;
        let results = extract_search(&html);

        tracing::info!(query, count = results.len(), "Search completed");
        Ok(results)
    }

    /// Extracts metadata and download candidates from an item page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on fetch failure.
    pub async fn details(&self, item_url: &str) -> Result<MovieDetails, AppError> {
        let html = self.fetch_page(item_url, self.fetch_timeout).await?;
        let details = extract_details(&html);

        tracing::info!(
            url = item_url,
            links = details.download_links.len(),
            "Details extracted"
        );
        Ok(details)
    }

    /// Resolves a countdown page into final download links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on fetch failure. A page without any
    /// usable link yields an empty list, not an error.
    pub async fn download(&self, countdown_url: &str) -> Result<Vec<ResolvedLink>, AppError> {
        let html = self.fetch_page(countdown_url, self.fetch_timeout).await?;
        let links = resolve_links(&html);

        tracing::info!(url = countdown_url, count = links.len(), "Links resolved");
        Ok(links)
    }

    /// `<base>/?s=<query>` with the query form-encoded. A path prefix on the
    /// base is kept.
    fn search_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}/", url.path().trim_end_matches('/'));
        url.set_path(&path);
        url.set_query(None);
        url.query_pairs_mut().append_pair("s", query);
        url
    }

    async fn fetch_page(&self, url: &str, timeout: Duration) -> Result<String, AppError> {
        let page = self.fetcher.fetch(url, timeout).await.map_err(|e| {
            tracing::warn!(url, error = %e, "Upstream fetch failed");
            AppError::from(e)
        })?;

        if !page.is_success() {
            tracing::warn!(url, status = page.status, "Upstream returned error status");
            return Err(AppError::upstream(format!(
                "Request failed with status code {}",
                page.status
            )));
        }

        Ok(page.body)
    }
}
