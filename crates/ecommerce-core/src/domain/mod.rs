//! Domain entities served by the e-commerce services.

pub mod entities;

pub use entities::*;
