//! User entity.

use crate::{Entity, EntityId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, zero until persisted.
    pub id: EntityId,

    /// User's name.
    pub name: String,

    /// User's email address.
    pub email: String,

    /// Creation timestamp, set by the store.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp, set by the store.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates an unsaved user.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Request body for `POST /api/v1/users`.
///
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl Entity for User {
    type CreateRequest = CreateUserRequest;

    const KIND: &'static str = "user";
    const LABEL: &'static str = "User";

    fn from_request(request: CreateUserRequest) -> Self {
        Self::new(request.name, request.email)
    }

    fn id(&self) -> EntityId {
        self.id
    }
}
