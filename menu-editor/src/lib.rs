//! Chefs Menu Editor
//!
//! Single-screen editor for a restaurant menu: add dishes through a dialog and
//! filter the list by course. Everything lives in memory for one session.
//!
//! # Module structure
//!
//! ```text
//! menu-editor/src/
//! ├── core/     # configuration
//! ├── menu/     # dish store, add-dish form, price parsing
//! ├── tui/      # ratatui front end
//! └── utils/    # logging, validation helpers
//! ```

pub mod core;
pub mod menu;
pub mod tui;
pub mod utils;

pub use core::Config;
pub use menu::{DishDraft, DishForm, DraftField, MenuStore, parse_price};
pub use utils::{AppError, AppResult, ErrorCode};

pub use utils::logger::init_logger;
