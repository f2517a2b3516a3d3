//! Data models
//!
//! All IDs are `i64` snowflakes (see [`crate::util::IdGenerator`]).

pub mod category;
pub mod dish;
pub mod price;

// Re-exports
pub use category::*;
pub use dish::*;
pub use price::*;
