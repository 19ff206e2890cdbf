//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs mirror the JSON envelopes callers depend on and are kept
//! separate from the domain entities they are built from. Query DTOs use
//! validator for required-parameter checks.

pub mod details;
pub mod download;
pub mod health;
pub mod query;
pub mod search;
