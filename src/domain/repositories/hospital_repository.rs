//! Repository trait for hospital records.

use crate::domain::entities::{Hospital, NewHospital};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for storing hospitals.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteHospitalRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_hospital.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HospitalRepository: Send + Sync {
    /// Inserts a new hospital, assigning `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_hospital: NewHospital) -> Result<Hospital, AppError>;

    /// Lists all hospitals in storage order (ascending `id`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Hospital>, AppError>;

    /// Finds a hospital by its ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Hospital>, AppError>;

    /// Replaces the mutable fields of an existing hospital.
    ///
    /// Returns `Ok(None)` if no hospital with this ID exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, fields: NewHospital) -> Result<Option<Hospital>, AppError>;

    /// Removes a hospital. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored hospitals.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
