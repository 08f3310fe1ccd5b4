//! Handlers for liveness and the service descriptor.

use axum::Json;

use crate::api::dto::health::{EndpointInfo, HealthResponse, ServiceInfo};

/// Constant liveness probe.
///
/// # Endpoint
///
/// `GET /health`
///
/// Touches neither storage nor cache.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}

/// Describes the service and its endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Hospital Registry API",
        version: env!("CARGO_PKG_VERSION"),
        docs: "/docs",
        endpoints: vec![
            endpoint("GET", "/health", "Liveness probe"),
            endpoint("POST", "/api/hospitals", "Register a hospital"),
            endpoint("GET", "/api/hospitals", "List hospitals"),
            endpoint("GET", "/api/hospitals/{id}", "Get a hospital"),
            endpoint("PUT", "/api/hospitals/{id}", "Replace a hospital's details"),
            endpoint("DELETE", "/api/hospitals/{id}", "Delete a hospital"),
            endpoint("GET", "/docs", "API documentation (markdown)"),
        ],
    })
}

fn endpoint(method: &'static str, path: &'static str, description: &'static str) -> EndpointInfo {
    EndpointInfo {
        method,
        path,
        description,
    }
}
