//! Core domain entities representing the scraped data model.
//!
//! Entities are plain value objects produced by the extractors in
//! [`crate::extraction`]. None of them outlives a single request; they are
//! mapped into API DTOs and dropped once the response is written.
//!
//! # Entity Types
//!
//! - [`SearchResult`] - One hit on the search results page
//! - [`MovieDetails`] - Metadata and download candidates of an item page
//! - [`ResolvedLink`] - A final, classified download link from a countdown page

pub mod link;
pub mod media;
pub mod movie;

pub use link::{LinkKind, ResolvedLink};
pub use media::{MediaType, SearchResult};
pub use movie::{DownloadCandidate, MovieDetails};
