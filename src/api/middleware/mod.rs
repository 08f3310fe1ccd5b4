//! HTTP middleware for request processing and protection.
//!
//! Provides rate limiting, response caching, and observability middleware.

pub mod cache;
pub mod rate_limit;
pub mod tracing;
