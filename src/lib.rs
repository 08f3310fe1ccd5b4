//! # Hospital Registry
//!
//! A small REST service for registering hospitals, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The hospital entity and repository trait
//! - **Application Layer** ([`application`]) - Registry service
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and cache backends
//! - **API Layer** ([`api`]) - Handlers, DTOs, extractors and middleware
//!
//! ## Features
//!
//! - Hospital CRUD with field validation reporting every violation at once
//! - Per-client rate limiting (route limits plus site-wide hourly/daily ceilings)
//! - GET response caching in memory or Redis
//! - Markdown documentation served at `/docs`
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://hospitals.db?mode=rwc"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::HospitalService;
    pub use crate::domain::entities::{Hospital, NewHospital};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
