//! SQLite persistence.
//!
//! - [`database`] - Pool construction and embedded migrations
//! - [`SqliteHospitalRepository`] - Hospital storage and retrieval

pub mod database;
pub mod sqlite_hospital_repository;

pub use database::{MIGRATOR, PoolSettings, connect, migrate};
pub use sqlite_hospital_repository::SqliteHospitalRepository;
