//! Infrastructure layer for external integrations.
//!
//! - [`cache`] - Response cache backends (memory, Redis, no-op)
//! - [`persistence`] - SQLite pool, migrations and repository implementations

pub mod cache;
pub mod persistence;
