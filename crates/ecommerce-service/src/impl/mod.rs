//! Entity service implementations.
//!
//! Trait definitions live in the parent module (`entity_service.rs`).

pub mod entity_service_impl;

pub use entity_service_impl::EntityServiceImpl;
