//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest-backed page fetcher with the fixed browser header set

pub mod http;
