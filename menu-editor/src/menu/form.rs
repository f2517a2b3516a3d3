//! Dish Form
//!
//! Add-dish dialog state machine:
//!
//! ```text
//! Closed --open()--> Open(draft) --save() ok--> Closed
//!                         |
//!                         +--cancel()--------> Closed
//! ```
//!
//! `open()` always builds a fresh [`DishDraft`], so nothing from an earlier
//! session leaks into the next one. Fields take any text while editing; the
//! draft is only validated by [`DishForm::can_save`] and [`DishForm::save`].

use super::price::parse_price;
use super::store::MenuStore;
use crate::utils::validation::validate_required_text;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Dish, DishCategory, DishCreate};

/// Title of the alert shown for a rejected save
pub const VALIDATION_ALERT_TITLE: &str = "Validation Error";

/// Message of the alert shown for a rejected save
pub const VALIDATION_MESSAGE: &str = "Dish name and a valid price are required.";

/// Free-text fields of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Description,
    Price,
}

/// Unvalidated dish as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub category: DishCategory,
    pub price: String,
}

impl DishDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Description => &mut self.description,
            DraftField::Price => &mut self.price,
        }
    }

    /// Build the finalized payload, or say why the draft is not savable.
    ///
    /// Every error carries [`VALIDATION_MESSAGE`]; the failing field and the
    /// underlying reason are in the details.
    pub fn validate(&self) -> AppResult<DishCreate> {
        validate_required_text(&self.name, "Dish name").map_err(|e| {
            AppError::with_message(ErrorCode::DishNameRequired, VALIDATION_MESSAGE)
                .with_detail("field", "name")
                .with_detail("reason", e.message)
        })?;

        let price = parse_price(&self.price).map_err(|e| {
            AppError::with_message(ErrorCode::DishPriceInvalid, VALIDATION_MESSAGE)
                .with_detail("field", "price")
                .with_detail("reason", e.message)
        })?;

        Ok(DishCreate {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category,
            price,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum FormState {
    #[default]
    Closed,
    Open(DishDraft),
}

/// Add-dish dialog
#[derive(Debug, Clone, Default)]
pub struct DishForm {
    state: FormState,
}

impl DishForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog with an empty draft, discarding any previous one
    pub fn open(&mut self) {
        tracing::debug!("Dish form opened");
        self.state = FormState::Open(DishDraft::default());
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open(_))
    }

    /// Current draft, `None` while closed
    pub fn draft(&self) -> Option<&DishDraft> {
        match &self.state {
            FormState::Open(draft) => Some(draft),
            FormState::Closed => None,
        }
    }

    fn draft_mut(&mut self) -> Option<&mut DishDraft> {
        match &mut self.state {
            FormState::Open(draft) => Some(draft),
            FormState::Closed => None,
        }
    }

    /// Replace one text field. Ignored while closed.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        if let Some(draft) = self.draft_mut() {
            *draft.field_mut(field) = value.into();
        }
    }

    pub fn push_char(&mut self, field: DraftField, c: char) {
        if let Some(draft) = self.draft_mut() {
            draft.field_mut(field).push(c);
        }
    }

    pub fn pop_char(&mut self, field: DraftField) {
        if let Some(draft) = self.draft_mut() {
            draft.field_mut(field).pop();
        }
    }

    pub fn select_category(&mut self, category: DishCategory) {
        if let Some(draft) = self.draft_mut() {
            draft.category = category;
        }
    }

    /// Step through categories for keyboard selection
    pub fn cycle_category(&mut self, forward: bool) {
        if let Some(draft) = self.draft_mut() {
            draft.category = if forward {
                draft.category.next()
            } else {
                draft.category.prev()
            };
        }
    }

    /// Whether the save action is enabled
    pub fn can_save(&self) -> bool {
        self.draft().is_some_and(|d| d.validate().is_ok())
    }

    /// Validate the draft and hand it to the store.
    ///
    /// - closed: nothing happens, `Ok(None)`
    /// - invalid: the validation error is returned, the form stays open and
    ///   the store is untouched
    /// - valid: the dish is added and the form closes
    pub fn save<'s>(&mut self, store: &'s mut MenuStore) -> AppResult<Option<&'s Dish>> {
        let Some(draft) = self.draft() else {
            tracing::debug!("Save ignored, dish form is closed");
            return Ok(None);
        };

        let payload = match draft.validate() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(code = %e.code, details = ?e.details, "Dish rejected");
                return Err(e);
            }
        };

        self.state = FormState::Closed;
        Ok(Some(store.add_dish(payload)))
    }

    /// Close the dialog and drop the draft
    pub fn cancel(&mut self) {
        if self.is_open() {
            tracing::debug!("Dish form cancelled");
        }
        self.state = FormState::Closed;
    }
}
