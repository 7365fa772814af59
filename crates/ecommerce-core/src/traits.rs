//! Core traits shared by every layer.

use crate::EntityId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// An entity kind served by one of the microservices.
///
/// The repository, cache, service and HTTP layers are all generic over this
/// trait, so adding a new kind means implementing it once.
pub trait Entity: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Payload accepted by the create endpoint.
    type CreateRequest: Debug + DeserializeOwned + Send + Sync + 'static;

    /// Lower-case kind name, used in cache keys and route paths
    /// (`"user"` gives `user:<id>` and `/api/v1/users`).
    const KIND: &'static str;

    /// Capitalised name used in client-facing messages.
    const LABEL: &'static str;

    /// Builds an unsaved entity from a create request.
    fn from_request(request: Self::CreateRequest) -> Self;

    /// Returns the store-assigned identifier.
    fn id(&self) -> EntityId;

    /// Returns true once the store has assigned an identifier.
    fn is_persisted(&self) -> bool {
        !self.id().is_unset()
    }
}
