//! Outbound HTTP access to the target site.
//!
//! Provides [`ReqwestFetcher`], the production [`crate::domain::fetcher::PageFetcher`].

mod reqwest_fetcher;

pub use reqwest_fetcher::{BROWSER_USER_AGENT, ReqwestFetcher};
