//! Product entity.

use crate::{Entity, EntityId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalogue product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier, zero until persisted.
    pub id: EntityId,

    /// Product name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Unit price. Zero and negative values are accepted as-is.
    pub price: f64,

    /// Creation timestamp, set by the store.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp, set by the store.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates an unsaved product.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            ..Self::default()
        }
    }
}

/// Request body for `POST /api/v1/products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Entity for Product {
    type CreateRequest = CreateProductRequest;

    const KIND: &'static str = "product";
    const LABEL: &'static str = "Product";

    fn from_request(request: CreateProductRequest) -> Self {
        Self::new(request.name, request.description, request.price)
    }

    fn id(&self) -> EntityId {
        self.id
    }
}
