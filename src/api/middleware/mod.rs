//! HTTP middleware for request processing.
//!
//! Provides request observability.

pub mod tracing;
