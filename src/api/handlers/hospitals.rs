//! Handlers for hospital registration, lookup, update and removal.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::hospital::{HospitalRequest, HospitalResponse};
use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::middleware::cache::invalidate_hospital;
use crate::domain::entities::NewHospital;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new hospital.
///
/// # Endpoint
///
/// `POST /api/hospitals`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Test Hospital",
///   "address": "123 Test St",
///   "phone": "1234567890",
///   "capacity": 100
/// }
/// ```
///
/// # Errors
///
/// Returns 400 listing every invalid field; nothing is written in that case.
pub async fn create_hospital_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<HospitalRequest>,
) -> Result<(StatusCode, Json<HospitalResponse>), AppError> {
    let new_hospital = NewHospital::try_from(payload)?;

    let hospital = state.hospital_service.register(new_hospital).await?;

    invalidate_hospital(state.cache.as_ref(), None).await;

    Ok((StatusCode::CREATED, Json(hospital.into())))
}

/// Lists all hospitals in storage order.
///
/// # Endpoint
///
/// `GET /api/hospitals`
pub async fn list_hospitals_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<HospitalResponse>>, AppError> {
    let hospitals = state.hospital_service.list().await?;

    Ok(Json(hospitals.into_iter().map(HospitalResponse::from).collect()))
}

/// Returns one hospital.
///
/// # Endpoint
///
/// `GET /api/hospitals/{id}`
///
/// # Errors
///
/// Returns 404 if the hospital does not exist.
pub async fn get_hospital_handler(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<Json<HospitalResponse>, AppError> {
    let hospital = state.hospital_service.get(id).await?;

    Ok(Json(hospital.into()))
}

/// Replaces name, address, phone and capacity of a hospital.
///
/// # Endpoint
///
/// `PUT /api/hospitals/{id}`
///
/// The body has the same shape and rules as registration. The payload is
/// validated before the record is looked up.
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the hospital does not exist.
pub async fn update_hospital_handler(
    IdPath(id): IdPath,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<HospitalRequest>,
) -> Result<Json<HospitalResponse>, AppError> {
    let fields = NewHospital::try_from(payload)?;

    let hospital = state.hospital_service.update(id, fields).await?;

    invalidate_hospital(state.cache.as_ref(), Some(id)).await;

    Ok(Json(hospital.into()))
}

/// Deletes a hospital.
///
/// # Endpoint
///
/// `DELETE /api/hospitals/{id}`
///
/// # Errors
///
/// Returns 404 if the hospital does not exist.
pub async fn delete_hospital_handler(
    IdPath(id): IdPath,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.hospital_service.delete(id).await?;

    invalidate_hospital(state.cache.as_ref(), Some(id)).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Answers unknown routes in the API error shape.
pub async fn fallback_handler() -> AppError {
    AppError::not_found("The requested URL was not found on the server")
}

/// Answers an unsupported method on a known path in the API error shape.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed("The method is not allowed for the requested URL")
}
