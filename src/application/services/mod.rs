//! Business logic services for the application layer.

pub mod hospital_service;

pub use hospital_service::HospitalService;
