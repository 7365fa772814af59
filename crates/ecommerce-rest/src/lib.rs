//! # Ecommerce REST
//!
//! HTTP surface of the users and products services, built on Axum.
//!
//! Every service exposes the same shape for its entity kind:
//!
//! | Route | Method | Responses |
//! |---|---|---|
//! | `/api/v1/<kind>s` | POST | 201, 400, 405, 500 |
//! | `/api/v1/<kind>s/<id>` | GET | 200, 400, 404, 405, 500 |
//! | `/health` | GET | 200 |

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
