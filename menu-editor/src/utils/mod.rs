//! Utilities
//!
//! - Logging setup
//! - Input validation helpers

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCode};
