//! DTOs for the liveness and service descriptor endpoints.

use serde::{Deserialize, Serialize};

/// Liveness response: always `{"status":"OK"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Response of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub docs: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

/// One row of the endpoint table.
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}
