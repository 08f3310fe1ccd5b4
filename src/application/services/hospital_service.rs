//! Hospital registry service.

use crate::domain::entities::{Hospital, NewHospital};
use crate::domain::repositories::HospitalRepository;
use crate::error::AppError;
use std::sync::Arc;

/// Service for registering and managing hospitals.
///
/// Payload validation happens before a [`NewHospital`] is built, so every
/// value reaching this service already satisfies the field constraints.
pub struct HospitalService<R: HospitalRepository> {
    repository: Arc<R>,
}

impl<R: HospitalRepository> HospitalService<R> {
    /// Creates a new hospital service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new hospital.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn register(&self, new_hospital: NewHospital) -> Result<Hospital, AppError> {
        let hospital = self.repository.create(new_hospital).await?;
        tracing::info!(id = hospital.id, name = %hospital.name, "Hospital registered");
        Ok(hospital)
    }

    /// Lists all hospitals in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<Hospital>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a hospital by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hospital does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get(&self, id: i64) -> Result<Hospital, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces name, address, phone and capacity of an existing hospital.
    ///
    /// `id` and `created_at` are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hospital does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, id: i64, fields: NewHospital) -> Result<Hospital, AppError> {
        let hospital = self
            .repository
            .update(id, fields)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, "Hospital updated");
        Ok(hospital)
    }

    /// Deletes a hospital.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hospital does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(id, "Hospital deleted");
        Ok(())
    }

    /// Counts registered hospitals.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Hospital with id {} not found", id))
}
