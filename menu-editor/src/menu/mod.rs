//! Menu core
//!
//! - [`MenuStore`]: dish list and active filter
//! - [`DishForm`]: add-dish dialog and its draft
//! - [`price`]: price text parsing
//!
//! Independent of the terminal front end.

pub mod form;
pub mod price;
pub mod store;

pub use form::{DishDraft, DishForm, DraftField, VALIDATION_ALERT_TITLE, VALIDATION_MESSAGE};
pub use price::parse_price;
pub use store::MenuStore;
