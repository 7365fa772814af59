//! REST API controllers.

pub mod entity_controller;
pub mod health_controller;

pub use health_controller::HealthResponse;
