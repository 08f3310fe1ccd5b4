//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                    - Service descriptor
//! - `GET  /health`              - Liveness probe
//! - `/api/hospitals[/{id}]`     - Hospital CRUD
//! - `GET  /docs`                - Markdown documentation
//!
//! Unknown paths answer 404 and unsupported methods 405, both as JSON errors.
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - Structured request/response logging
//! - **429 rendering** - Governor rejections rewritten to the JSON error shape
//! - **Site-wide rate limits** - 200/day and 50/hour per client address
//! - **Route rate limits** - 10/min for writes, 30/min for reads and docs
//! - **Response cache** - 60s for hospital reads, 300s for docs
//!
//! Validation runs inside the handlers, after every layer above has let the
//! request through, and before storage is touched.

use crate::api::handlers::{
    fallback_handler, health_handler, index_handler, method_not_allowed_handler,
};
use crate::api::middleware::cache::{self, CachePolicy, DOCS_TTL, READ_TTL};
use crate::api::middleware::{rate_limit, tracing};
use crate::api::routes::{docs_routes, read_routes, write_routes};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Rate limiting keys on the peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState) -> Router {
    let reads = read_routes()
        .route_layer(middleware::from_fn_with_state(
            CachePolicy::new(state.cache.clone(), READ_TTL),
            cache::layer,
        ))
        .route_layer(rate_limit::read_layer());

    let docs = docs_routes()
        .route_layer(middleware::from_fn_with_state(
            CachePolicy::new(state.cache.clone(), DOCS_TTL),
            cache::layer,
        ))
        .route_layer(rate_limit::read_layer());

    let writes = write_routes().route_layer(rate_limit::write_layer());

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .merge(reads)
        .merge(writes)
        .merge(docs)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(fallback_handler)
        .layer(rate_limit::hourly_layer())
        .layer(rate_limit::daily_layer())
        .layer(middleware::map_response(rate_limit::json_rejection))
        .layer(tracing::layer())
        .with_state(state)
}
