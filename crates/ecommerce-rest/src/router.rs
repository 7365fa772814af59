//! Main application router.

use crate::{
    controllers::{entity_controller, health_controller},
    middleware::logging_middleware,
    responses::AppError,
    state::AppState,
};
use axum::{middleware, Router};
use ecommerce_core::Entity;
use ecommerce_service::EntityService;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Creates the router of an entity service: the create/read routes for `E`
/// plus `/health`.
pub fn create_router<E: Entity>(service: Arc<dyn EntityService<E>>, service_name: &str) -> Router {
    let state = AppState::new(service);

    let api_router = entity_controller::router::<E>().with_state(state);

    let router = with_common_layers(
        Router::new()
            .merge(health_controller::router(service_name))
            .merge(api_router),
    );

    info!(
        service = service_name,
        routes = %format!("/api/v1/{}s", E::KIND),
        "Router created"
    );
    router
}

/// Creates a router that only serves `/health`.
pub fn create_health_router(service_name: &str) -> Router {
    with_common_layers(health_controller::router(service_name))
}

fn with_common_layers(router: Router) -> Router {
    router.fallback(not_found).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(logging_middleware)),
    )
}

async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}
