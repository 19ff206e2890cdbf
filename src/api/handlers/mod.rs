//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one public operation.

pub mod details;
pub mod download;
pub mod health;
pub mod search;

pub use details::details_handler;
pub use download::download_handler;
pub use health::health_handler;
pub use search::search_handler;
