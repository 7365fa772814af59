//! Health check controller.

use crate::controllers::entity_controller::method_not_allowed;
use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Name of the reporting service.
    pub service: String,
    /// Always `"ok"` while the process serves requests.
    pub status: String,
}

/// Creates the health router for the named service.
pub fn router(service_name: &str) -> Router {
    let name: Arc<str> = Arc::from(service_name);

    Router::new()
        .route("/health", get(health_check).fallback(method_not_allowed))
        .with_state(name)
}

/// Health check endpoint. Does not contact the store or the cache.
pub async fn health_check(State(name): State<Arc<str>>) -> impl IntoResponse {
    Json(HealthResponse {
        service: name.to_string(),
        status: "ok".to_string(),
    })
}
