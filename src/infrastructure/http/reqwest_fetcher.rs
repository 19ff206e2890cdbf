//! reqwest implementation of [`PageFetcher`].

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, HeaderMap, HeaderValue, REFERER, USER_AGENT,
};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::domain::fetcher::{FetchError, FetchedPage, PageFetcher};

/// Desktop Chrome user agent sent with every request.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Page fetcher backed by a single shared [`reqwest::Client`].
///
/// The header set is fixed at construction: browser user agent, standard
/// accept headers, `Cache-Control: no-cache` and a `Referer` pointing at the
/// target site root. Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Builds a fetcher whose requests carry `referer` as the `Referer` header.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if `referer` is not a valid header
    /// value and [`FetchError::Transport`] if the TLS backend fails to initialize.
    pub fn new(referer: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .default_headers(browser_headers(referer)?)
            .build()
            .map_err(|e| FetchError::Transport(format!("HTTP client construction failed: {e}")))?;

        Ok(Self { client })
    }
}

fn browser_headers(referer: &str) -> Result<HeaderMap, FetchError> {
    let referer =
        HeaderValue::from_str(referer).map_err(|_| FetchError::InvalidUrl(referer.to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(REFERER, referer);
    Ok(headers)
}

fn map_reqwest_error(e: reqwest::Error, timeout: Duration) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(timeout.as_millis())
    } else if e.is_builder() {
        FetchError::InvalidUrl(e.to_string())
    } else {
        FetchError::Transport(e.to_string())
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError> {
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| map_reqwest_error(e, timeout))?;

        debug!(
            url,
            status,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched upstream page"
        );

        Ok(FetchedPage { status, body })
    }
}
