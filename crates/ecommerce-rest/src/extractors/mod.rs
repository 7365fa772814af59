//! Request parsing helpers.

mod entity_id;

pub use entity_id::extract_id;
