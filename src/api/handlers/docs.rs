//! Handler for the documentation page.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Serves the configured markdown documentation.
///
/// # Endpoint
///
/// `GET /docs`
///
/// # Errors
///
/// Returns 404 `docs_unavailable` if the file cannot be read.
pub async fn docs_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let content = tokio::fs::read_to_string(state.docs_path.as_path())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, path = %state.docs_path.display(), "Documentation unavailable");
            AppError::docs_unavailable("Documentation not found")
        })?;

    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        content,
    )
        .into_response())
}
