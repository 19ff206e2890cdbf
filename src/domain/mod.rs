//! Domain layer containing the scraped entities and the fetch contract.
//!
//! # Architecture
//!
//! - [`entities`] - Value objects produced by the extractors
//! - [`fetcher`] - [`fetcher::PageFetcher`] trait implemented by the infrastructure layer
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The fetch trait defines the only outbound seam; tests swap it for mocks
//! - Extraction logic lives in [`crate::extraction`] and is pure (HTML in, entities out)

pub mod entities;
pub mod fetcher;
