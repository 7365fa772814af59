//! Identifier extraction from request paths.

use ecommerce_core::{EcommerceError, EcommerceResult, EntityId};

/// Takes the identifier from the last segment of a path such as
/// `/api/v1/users/123`.
///
/// Paths with fewer than four `/`-separated parts, an empty last segment,
/// or a non-numeric last segment are rejected.
pub fn extract_id(path: &str) -> EcommerceResult<EntityId> {
    let parts: Vec<&str> = path.split('/').collect();
    if parts.len() < 4 {
        return Err(EcommerceError::validation(format!("Invalid path: {}", path)));
    }

    let last = parts[parts.len() - 1];
    EntityId::parse(last)
        .map_err(|e| EcommerceError::validation(format!("Invalid ID '{}': {}", last, e)))
}
