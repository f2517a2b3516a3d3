//! Unified error system for the menu editor
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Menu errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::DishNameRequired);
//!
//! // Create an error with details
//! let err = AppError::with_message(
//!     ErrorCode::DishPriceInvalid,
//!     "Dish name and a valid price are required.",
//! )
//! .with_detail("field", "price");
//! assert!(err.is_validation());
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
