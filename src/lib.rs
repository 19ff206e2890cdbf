//! # cinesubz scraper
//!
//! Search, detail extraction and download-link resolution for cinesubz.co,
//! served as a small JSON API built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Value entities and the page fetcher trait
//! - **Extraction** ([`extraction`]) - Pure HTML extractors and the URL transformation engine
//! - **Application Layer** ([`application`]) - Catalog service orchestrating fetch and extraction
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest-backed fetch client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Operations
//!
//! - `GET /health` - Target reachability and latency
//! - `GET /search?q=` - Keyword search
//! - `GET /details?url=` - Item metadata and download candidates
//! - `GET /download?url=` - Countdown page resolution into canonical download links
//!
//! ## Quick Start
//!
//! ```bash
//! export TARGET_BASE_URL="https://cinesubz.co"  # Optional
//! cargo run
//! curl "http://localhost:5000/search?q=dune"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod extraction;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CatalogService;
    pub use crate::domain::entities::{
        DownloadCandidate, LinkKind, MediaType, MovieDetails, ResolvedLink, SearchResult,
    };
    pub use crate::domain::fetcher::{FetchError, FetchedPage, PageFetcher};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
