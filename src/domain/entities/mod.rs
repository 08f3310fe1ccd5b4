//! Core domain entities.
//!
//! - [`Hospital`] - A persisted hospital record
//! - [`NewHospital`] - The mutable fields used for registration and update

pub mod hospital;

pub use hospital::{Hospital, NewHospital};
