//! Application layer services implementing the scraper operations.
//!
//! Services consume the [`PageFetcher`](crate::domain::fetcher::PageFetcher)
//! seam and the pure extractors, and provide a clean API for HTTP handlers and
//! the CLI.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Health probe, search, details and link resolution

pub mod services;
