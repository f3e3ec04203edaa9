//! Health check route shared by the services.

use axum::{response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy(service: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.to_string(),
        }
    }
}

/// Create health routes for the named service.
///
/// The services hold no external connections, so being able to answer is
/// the whole check.
pub fn health_routes<S>(service: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(move || health_check(service)))
}

/// Health check endpoint.
pub async fn health_check(service: &'static str) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(service))
}
