//! # Ecommerce Server Library
//!
//! Composition root shared by the `users-service`, `products-service` and
//! `gateway` binaries: configuration, logging, wiring and the HTTP server
//! lifecycle.

pub mod app;
pub mod di;
pub mod startup;

pub use app::{bootstrap, run_gateway, run_service};
