//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::hospital_service::HospitalService`] - Hospital registration and lookup

pub mod services;
