//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into catalog operations and formats
//! responses according to the JSON envelopes callers depend on.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for query parsing and response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
