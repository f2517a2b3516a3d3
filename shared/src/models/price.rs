//! Price Model
//!
//! Monetary amounts are kept as [`Decimal`] and always carry exactly two
//! fractional digits, so `Display` renders `12.50` rather than `12.5`.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fractional digits kept for every price
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Non-negative amount with two fractional digits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Round to two places (half away from zero) and pin the scale.
    ///
    /// Callers guarantee `value` is non-negative; a negative zero is
    /// normalized to zero.
    pub fn from_decimal(value: Decimal) -> Self {
        let mut rounded = if value.is_zero() {
            Decimal::ZERO
        } else {
            value.round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        };
        rounded.rescale(PRICE_DECIMAL_PLACES);
        Self(rounded)
    }

    /// Underlying decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Two-digit string form, e.g. `"7.00"`
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
