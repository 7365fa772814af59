//! Entity kinds and their create requests.

mod product;
mod user;

pub use product::*;
pub use user::*;
