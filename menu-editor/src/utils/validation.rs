//! Input validation helpers

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};

/// Largest dish price `Decimal` can hold with two fractional digits
pub const MAX_PRICE: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, 2);

/// Validate that a required string is non-empty after trimming.
pub fn validate_required_text(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    Ok(())
}
