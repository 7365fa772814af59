//! Create and read endpoints for one entity kind.

use crate::{
    extractors::extract_id,
    responses::{created, ApiResult, AppError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use ecommerce_core::Entity;
use tracing::{debug, warn};

/// Creates the entity router mounted at `/api/v1/<kind>s`.
pub fn router<E: Entity>() -> Router<AppState<E>> {
    let collection = format!("/api/v1/{}s", E::KIND);

    Router::new()
        .route(
            &collection,
            post(create_entity::<E>).fallback(method_not_allowed),
        )
        // `/*rest` does not match an empty segment, so the bare trailing
        // slash is routed explicitly and rejected by `extract_id`.
        .route(
            &format!("{}/", collection),
            get(get_entity::<E>).fallback(method_not_allowed),
        )
        .route(
            &format!("{}/*rest", collection),
            get(get_entity::<E>).fallback(method_not_allowed),
        )
}

/// Create an entity from a JSON body.
///
/// The body is decoded regardless of `Content-Type`.
async fn create_entity<E: Entity>(
    State(state): State<AppState<E>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<E>)> {
    let request: E::CreateRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(kind = E::KIND, error = %e, "Rejected create request body");
        AppError::bad_request("Invalid JSON")
    })?;

    debug!(kind = E::KIND, ?request, "Create request");

    let entity = state
        .service
        .create(request)
        .await
        .map_err(|_| AppError::internal(format!("Failed to create {}", E::KIND)))?;

    Ok(created(entity))
}

/// Get an entity by the ID in the last path segment.
async fn get_entity<E: Entity>(
    State(state): State<AppState<E>>,
    uri: Uri,
) -> ApiResult<Json<E>> {
    let id = extract_id(uri.path()).map_err(|e| {
        debug!(kind = E::KIND, path = %uri.path(), error = %e, "Rejected entity ID");
        AppError::bad_request(format!("Invalid {} ID", E::KIND))
    })?;

    match state.service.get_by_id(id).await {
        Ok(Some(entity)) => Ok(Json(entity)),
        Ok(None) => Err(AppError::not_found(format!("{} not found", E::LABEL))),
        Err(e) => {
            warn!(kind = E::KIND, id = %id, error = %e, "Lookup failed");
            Err(AppError::internal(format!("Failed to get {}", E::KIND)))
        }
    }
}

/// Fallback for any unsupported method on a known route.
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}
