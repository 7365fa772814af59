//! # Ecommerce Config
//!
//! Configuration management for the e-commerce services.
//! Values come from the process environment (and an optional `.env`
//! file), falling back to per-service defaults.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
