//! Result type aliases for the e-commerce services.

use crate::EcommerceError;

/// A specialized `Result` type for service operations.
pub type EcommerceResult<T> = Result<T, EcommerceError>;
