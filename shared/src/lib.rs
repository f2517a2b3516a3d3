//! Shared types for the menu editor
//!
//! Dish and category models, the unified error type, and id generation.
//! Nothing here knows about the terminal front end.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Dish, DishCategory, DishCreate, MenuFilter, Price};
