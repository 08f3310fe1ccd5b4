//! API route groups.
//!
//! Routes are split by rate-limit class so that each group can carry its own
//! limiter and cache policy (see [`crate::routes::app_router`]).

use crate::api::handlers::{
    create_hospital_handler, delete_hospital_handler, docs_handler, get_hospital_handler,
    list_hospitals_handler, update_hospital_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Cached, read-only hospital routes.
///
/// - `GET /api/hospitals`      - List hospitals
/// - `GET /api/hospitals/{id}` - Get a hospital
pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/api/hospitals", get(list_hospitals_handler))
        .route("/api/hospitals/{id}", get(get_hospital_handler))
}

/// Mutating hospital routes.
///
/// - `POST   /api/hospitals`      - Register a hospital
/// - `PUT    /api/hospitals/{id}` - Replace a hospital's fields
/// - `DELETE /api/hospitals/{id}` - Delete a hospital
pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/api/hospitals", post(create_hospital_handler))
        .route(
            "/api/hospitals/{id}",
            put(update_hospital_handler).delete(delete_hospital_handler),
        )
}

/// Documentation route.
///
/// - `GET /docs` - Markdown API reference
pub fn docs_routes() -> Router<AppState> {
    Router::new().route("/docs", get(docs_handler))
}
