//! Upstream page fetching contract.

use async_trait::async_trait;
use std::time::Duration;

/// Errors raised while talking to the target site.
///
/// An upstream response with an error status is *not* a [`FetchError`]; it is
/// returned as a [`FetchedPage`] so callers decide how to treat it.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("timeout of {0}ms exceeded")]
    Timeout(u128),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Transport(String),
}

/// Raw upstream response.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single outbound GET against the target site.
///
/// Implementations send the fixed browser-like header set and must honour the
/// given timeout. No retries.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::ReqwestFetcher`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the status code and body text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Timeout`] when `timeout` elapses,
    /// [`FetchError::InvalidUrl`] for unparsable URLs and
    /// [`FetchError::Transport`] for any other connection failure.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchedPage, FetchError>;
}
