//! HTTP-facing error type.
//!
//! Every failure surfaces to the client as
//! `{"error": <kind>, "message": <detail>, "status_code": <int>}`.
//! Validation failures additionally carry a `fields` map listing every
//! violated constraint per field.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use validator::ValidationErrors;

/// Per-field validation messages, ordered by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Serialized error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

#[derive(Debug)]
pub enum AppError {
    Validation {
        message: String,
        fields: Option<FieldErrors>,
    },
    NotFound {
        message: String,
    },
    DocsUnavailable {
        message: String,
    },
    MethodNotAllowed {
        message: String,
    },
    RateLimited {
        message: String,
    },
    Internal {
        message: String,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields: None,
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn docs_unavailable(message: impl Into<String>) -> Self {
        Self::DocsUnavailable {
            message: message.into(),
        }
    }
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Validation failure listing `fields`; the message names each field.
    pub fn invalid_fields(fields: FieldErrors) -> Self {
        let names: Vec<&str> = fields.keys().map(String::as_str).collect();

        AppError::Validation {
            message: format!("Invalid fields: {}", names.join(", ")),
            fields: Some(fields),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } | AppError::DocsUnavailable { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind used in the `error` field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::DocsUnavailable { .. } => "docs_unavailable",
            AppError::MethodNotAllowed { .. } => "method_not_allowed",
            AppError::RateLimited { .. } => "rate_limited",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Builds the JSON body without consuming the error into a response.
    pub fn to_body(&self) -> ErrorBody {
        let (message, fields) = match self {
            AppError::Validation { message, fields } => (message.clone(), fields.clone()),
            AppError::NotFound { message }
            | AppError::DocsUnavailable { message }
            | AppError::MethodNotAllowed { message }
            | AppError::RateLimited { message }
            | AppError::Internal { message } => (message.clone(), None),
        };

        ErrorBody {
            error: self.kind(),
            message,
            status_code: self.status().as_u16(),
            fields,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self.to_body();
        write!(f, "{}: {}", body.error, body.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message } = &self {
            tracing::error!(error = %message, "Request failed with internal error");
        }

        (self.status(), Json(self.to_body())).into_response()
    }
}

/// Flattens validator output into per-field messages, falling back to the
/// rule code where a rule has no message.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::invalid_fields(field_errors(&errors))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = ?e, "Database error");
        AppError::internal("Database error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_status_and_kind_mapping() {
        let cases = [
            (AppError::bad_request("x"), 400, "validation_error"),
            (AppError::not_found("x"), 404, "not_found"),
            (AppError::docs_unavailable("x"), 404, "docs_unavailable"),
            (AppError::method_not_allowed("x"), 405, "method_not_allowed"),
            (AppError::rate_limited("x"), 429, "rate_limited"),
            (AppError::internal("x"), 500, "internal_error"),
        ];

        for (err, status, kind) in cases {
            assert_eq!(err.status().as_u16(), status);
            assert_eq!(err.kind(), kind);
        }
    }

    #[test]
    fn test_body_shape() {
        let body = serde_json::to_value(AppError::not_found("Hospital not found").to_body())
            .unwrap();

        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "Hospital not found");
        assert_eq!(body["status_code"], 404);
        assert!(body.get("fields").is_none());
    }

    #[test]
    fn test_from_validation_errors_collects_all_fields() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "capacity",
            ValidationError::new("range").with_message("must be at least 1".into()),
        );
        errors.add("phone", ValidationError::new("regex"));

        let err = AppError::from(errors);
        let body = serde_json::to_value(err.to_body()).unwrap();

        assert_eq!(body["status_code"], 400);
        assert_eq!(body["message"], "Invalid fields: capacity, phone");
        assert_eq!(body["fields"]["capacity"][0], "must be at least 1");
        assert_eq!(body["fields"]["phone"][0], "regex");
    }
}
