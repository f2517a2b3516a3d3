//! Price input parsing
//!
//! Turns the free-form price text from the form into a [`Price`]. Accepts
//! anything that reads as a finite float (`12.5`, `7`, `.5`, `1e3`);
//! anything with leftover characters is rejected rather than partially read.

use crate::utils::validation::{MAX_PRICE, validate_required_text};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use shared::error::{AppError, AppResult};
use shared::models::Price;
use std::str::FromStr;

/// Anything below this rounds to `0.00`
const HALF_CENT: f64 = 0.005;

/// Parse price text into a two-digit [`Price`]
pub fn parse_price(input: &str) -> AppResult<Price> {
    validate_required_text(input, "Price")?;
    let text = input.trim();

    // Float grammar decides what is a number; `Decimal` alone skips '_'
    let float = f64::from_str(text)
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            AppError::invalid_format("Price is not a number").with_detail("input", text)
        })?;

    if float < 0.0 {
        return Err(AppError::out_of_range("Price must not be negative").with_detail("input", text));
    }
    if float < HALF_CENT {
        return Ok(Price::from_decimal(Decimal::ZERO));
    }

    let exact = if text.contains(['e', 'E']) {
        Decimal::from_scientific(text)
    } else {
        Decimal::from_str(text)
    };
    let value = match exact {
        Ok(value) => Some(value),
        Err(_) => Decimal::from_f64(float),
    }
    .filter(|v| *v <= MAX_PRICE)
    .ok_or_else(|| {
        AppError::out_of_range(format!("Price must not exceed {}", MAX_PRICE))
            .with_detail("input", text)
    })?;

    Ok(Price::from_decimal(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn formatted(input: &str) -> String {
        parse_price(input).unwrap().formatted()
    }

    #[test]
    fn test_two_fraction_digits() {
        assert_eq!(formatted("12.5"), "12.50");
        assert_eq!(formatted("7"), "7.00");
        assert_eq!(formatted("0"), "0.00");
        assert_eq!(formatted("  3.333  "), "3.33");
        assert_eq!(formatted("99.999"), "100.00");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(formatted("1.005"), "1.01");
        assert_eq!(formatted("1.015"), "1.02");
        assert_eq!(formatted("1.025"), "1.03");
        assert_eq!(formatted("0.005"), "0.01");
        assert_eq!(formatted("0.004"), "0.00");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(formatted("1e3"), "1000.00");
        assert_eq!(formatted("2.5e1"), "25.00");
        assert_eq!(formatted("5e-2"), "0.05");
    }

    #[test]
    fn test_large_and_tiny_values() {
        assert_eq!(formatted("2000000000"), "2000000000.00");
        assert_eq!(formatted("1e10"), "10000000000.00");
        assert_eq!(formatted("1e-30"), "0.00");
        assert_eq!(formatted("1e-300"), "0.00");
    }

    #[test]
    fn test_empty_is_required_field() {
        for input in ["", "   ", "\t\n"] {
            let err = parse_price(input).unwrap_err();
            assert_eq!(err.code, ErrorCode::RequiredField, "input {:?}", input);
        }
    }

    #[test]
    fn test_non_numeric_is_invalid_format() {
        for input in [
            "abc", "12abc", "1.2.3", "NaN", "inf", "-inf", "R10", "1e", "ten", "1_0", "1_000",
        ] {
            let err = parse_price(input).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidFormat, "input {:?}", input);
            assert!(err.detail("input").is_some());
        }
    }

    #[test]
    fn test_negative_rejected() {
        let err = parse_price("-5").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        let err = parse_price("-0.001").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(formatted("-0"), "0.00");
    }

    #[test]
    fn test_beyond_decimal_range() {
        for input in ["1e27", "1e300"] {
            let err = parse_price(input).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValueOutOfRange, "input {:?}", input);
        }
    }
}
