//! REST API layer for HTTP request/response handling.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extractors`] - Request extractors rejecting with the API error shape
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting, response caching and tracing
//! - [`routes`] - Route groups

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
