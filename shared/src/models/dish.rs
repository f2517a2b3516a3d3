//! Dish Model

use super::{DishCategory, Price};
use serde::{Deserialize, Serialize};

/// Shown in place of an empty description
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description provided.";

/// Dish entity
///
/// Immutable once created; there is no update path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique for the lifetime of the process, used as the list key
    pub id: i64,
    pub name: String,
    /// May be empty
    pub description: String,
    pub category: DishCategory,
    pub price: Price,
}

impl Dish {
    /// Build a dish from a finalized payload
    pub fn new(id: i64, payload: DishCreate) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            category: payload.category,
            price: payload.price,
        }
    }

    /// Description text for display, falling back to the placeholder
    pub fn display_description(&self) -> &str {
        if self.description.is_empty() {
            NO_DESCRIPTION_PLACEHOLDER
        } else {
            &self.description
        }
    }

    /// Price prefixed with a currency symbol, e.g. `R12.50`
    pub fn display_price(&self, currency_symbol: &str) -> String {
        format!("{}{}", currency_symbol, self.price)
    }
}

/// Create dish payload
///
/// Already trimmed and validated; the store never rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: DishCategory,
    pub price: Price,
}
