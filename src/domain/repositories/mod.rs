//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod hospital_repository;

pub use hospital_repository::HospitalRepository;

#[cfg(test)]
pub use hospital_repository::MockHospitalRepository;
