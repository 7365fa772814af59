//! # Ecommerce Core
//!
//! Core types, traits, and error definitions shared by the users and
//! products services. Every other crate in the workspace builds on the
//! entities and the error type defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
