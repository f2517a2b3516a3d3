//! Category Model
//!
//! Dishes belong to exactly one [`DishCategory`]. The list view filters by a
//! [`MenuFilter`], which is either every category or a single one.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Course a dish is served as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DishCategory {
    #[default]
    #[serde(rename = "Starters")]
    Starters,
    #[serde(rename = "Main Course")]
    MainCourse,
    #[serde(rename = "Desserts")]
    Desserts,
}

impl DishCategory {
    /// All categories in display order. The first one is the form default.
    pub const ALL: [DishCategory; 3] = [Self::Starters, Self::MainCourse, Self::Desserts];

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Starters => "Starters",
            Self::MainCourse => "Main Course",
            Self::Desserts => "Desserts",
        }
    }

    /// Position within [`DishCategory::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Starters => 0,
            Self::MainCourse => 1,
            Self::Desserts => 2,
        }
    }

    /// Next category, wrapping around
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DishCategory {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AppError::invalid_format(format!("Unknown dish category: {}", wanted))
                    .with_detail("value", wanted)
            })
    }
}

/// Active list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MenuFilter {
    /// Show every dish
    #[default]
    All,
    /// Show only dishes of one category
    Only(DishCategory),
}

impl MenuFilter {
    /// Filter buttons in display order
    pub const ALL: [MenuFilter; 4] = [
        Self::All,
        Self::Only(DishCategory::Starters),
        Self::Only(DishCategory::MainCourse),
        Self::Only(DishCategory::Desserts),
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    /// Whether a dish of `category` passes this filter
    pub fn matches(&self, category: DishCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::All => 0,
            Self::Only(category) => category.index() + 1,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl From<DishCategory> for MenuFilter {
    fn from(category: DishCategory) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for MenuFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MenuFilter {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<DishCategory>().map(Self::Only)
    }
}

impl TryFrom<String> for MenuFilter {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        value.parse()
    }
}

impl From<MenuFilter> for String {
    fn from(filter: MenuFilter) -> Self {
        filter.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_default_category_is_first() {
        assert_eq!(DishCategory::default(), DishCategory::ALL[0]);
        assert_eq!(DishCategory::default(), DishCategory::Starters);
    }

    #[test]
    fn test_category_cycle_wraps() {
        assert_eq!(DishCategory::Desserts.next(), DishCategory::Starters);
        assert_eq!(DishCategory::Starters.prev(), DishCategory::Desserts);
        assert_eq!(DishCategory::Starters.next(), DishCategory::MainCourse);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("main course".parse::<DishCategory>().unwrap(), DishCategory::MainCourse);
        assert_eq!(" Desserts ".parse::<DishCategory>().unwrap(), DishCategory::Desserts);

        let err = "Drinks".parse::<DishCategory>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_category_serde_uses_labels() {
        let json = serde_json::to_string(&DishCategory::MainCourse).unwrap();
        assert_eq!(json, "\"Main Course\"");
        let back: DishCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DishCategory::MainCourse);
    }

    #[test]
    fn test_filter_matches() {
        assert!(MenuFilter::All.matches(DishCategory::Desserts));
        assert!(MenuFilter::Only(DishCategory::Desserts).matches(DishCategory::Desserts));
        assert!(!MenuFilter::Only(DishCategory::Starters).matches(DishCategory::Desserts));
    }

    #[test]
    fn test_filter_buttons_order() {
        let labels: Vec<_> = MenuFilter::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["All", "Starters", "Main Course", "Desserts"]);
        for (i, filter) in MenuFilter::ALL.iter().enumerate() {
            assert_eq!(filter.index(), i);
        }
        assert_eq!(MenuFilter::All.prev(), MenuFilter::Only(DishCategory::Desserts));
    }

    #[test]
    fn test_filter_serde() {
        let json = serde_json::to_string(&MenuFilter::All).unwrap();
        assert_eq!(json, "\"All\"");
        let back: MenuFilter = serde_json::from_str("\"Desserts\"").unwrap();
        assert_eq!(back, MenuFilter::Only(DishCategory::Desserts));
        assert!(serde_json::from_str::<MenuFilter>("\"Soups\"").is_err());
    }
}
