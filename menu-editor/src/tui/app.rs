//! Terminal application state and key handling
//!
//! Key handling is kept free of terminal I/O so it can be driven from tests.

use crate::core::Config;
use crate::menu::{DishForm, DraftField, MenuStore};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::ListState;
use shared::error::AppError;
use shared::models::{DishCategory, MenuFilter};
use tui_input::{Input, InputRequest};
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

/// Focusable controls of the add-dish dialog, in tab order
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    #[default]
    Name,
    Description,
    Category,
    Price,
    Cancel,
    Save,
}

impl FormFocus {
    const ORDER: [FormFocus; 6] = [
        Self::Name,
        Self::Description,
        Self::Category,
        Self::Price,
        Self::Cancel,
        Self::Save,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Draft field edited by this control, if it is a text input
    pub fn field(&self) -> Option<DraftField> {
        match self {
            Self::Name => Some(DraftField::Name),
            Self::Description => Some(DraftField::Description),
            Self::Price => Some(DraftField::Price),
            Self::Category | Self::Cancel | Self::Save => None,
        }
    }
}

/// What the event loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// Text input widgets backing the draft fields
#[derive(Default)]
struct FieldInputs {
    name: Input,
    description: Input,
    price: Input,
}

pub struct App {
    pub config: Config,
    pub store: MenuStore,
    pub form: DishForm,
    /// Focused dialog control
    pub focus: FormFocus,
    /// Blocking alert, dismissed by any key
    pub alert: Option<AppError>,
    pub show_logs: bool,
    pub list_state: ListState,
    pub logger_state: TuiWidgetState,
    inputs: FieldInputs,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: MenuStore::new(),
            form: DishForm::new(),
            focus: FormFocus::default(),
            alert: None,
            show_logs: false,
            list_state: ListState::default(),
            logger_state: TuiWidgetState::new(),
            inputs: FieldInputs::default(),
        }
    }

    pub fn input(&self, field: DraftField) -> &Input {
        match field {
            DraftField::Name => &self.inputs.name,
            DraftField::Description => &self.inputs.description,
            DraftField::Price => &self.inputs.price,
        }
    }

    fn input_mut(&mut self, field: DraftField) -> &mut Input {
        match field {
            DraftField::Name => &mut self.inputs.name,
            DraftField::Description => &mut self.inputs.description,
            DraftField::Price => &mut self.inputs.price,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return AppAction::Continue;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return AppAction::Quit;
        }
        if self.alert.take().is_some() {
            return AppAction::Continue;
        }
        if self.form.is_open() {
            self.handle_form_key(key);
            AppAction::Continue
        } else {
            self.handle_menu_key(key)
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('a') | KeyCode::Char('+') => self.open_form(),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.set_filter(MenuFilter::ALL[index]);
            }
            KeyCode::Left => self.set_filter(self.store.filter().prev()),
            KeyCode::Right => self.set_filter(self.store.filter().next()),
            KeyCode::Down => self.list_state.select_next(),
            KeyCode::Up => self.list_state.select_previous(),
            KeyCode::Char('l') => self.show_logs = !self.show_logs,
            KeyCode::PageUp if self.show_logs => {
                self.logger_state.transition(TuiWidgetEvent::PrevPageKey)
            }
            KeyCode::PageDown if self.show_logs => {
                self.logger_state.transition(TuiWidgetEvent::NextPageKey)
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.save_form();
            return;
        }

        match key.code {
            KeyCode::Esc => self.form.cancel(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                FormFocus::Description => {
                    self.inputs.description.handle(InputRequest::InsertChar('\n'));
                    self.sync_field(DraftField::Description);
                }
                FormFocus::Price => self.save_form(),
                FormFocus::Cancel => self.form.cancel(),
                FormFocus::Save => {
                    // Disabled button
                    if self.form.can_save() {
                        self.save_form();
                    }
                }
                FormFocus::Name | FormFocus::Category => self.focus = self.focus.next(),
            },
            _ => match self.focus.field() {
                Some(field) => {
                    self.input_mut(field).handle_event(&Event::Key(key));
                    self.sync_field(field);
                }
                None if self.focus == FormFocus::Category => self.handle_category_key(key),
                None => {}
            },
        }
    }

    fn handle_category_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.form.cycle_category(false),
            KeyCode::Right | KeyCode::Char(' ') => self.form.cycle_category(true),
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.form.select_category(DishCategory::ALL[index]);
            }
            _ => {}
        }
    }

    fn sync_field(&mut self, field: DraftField) {
        let value = self.input(field).value().to_string();
        self.form.update_field(field, value);
    }

    fn set_filter(&mut self, filter: MenuFilter) {
        self.store.set_filter(filter);
        self.list_state.select(None);
    }

    fn open_form(&mut self) {
        self.form.open();
        self.inputs = FieldInputs::default();
        self.focus = FormFocus::default();
    }

    fn save_form(&mut self) {
        match self.form.save(&mut self.store) {
            Ok(Some(_)) => self.list_state.select(None),
            Ok(None) => {}
            Err(e) => self.alert = Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::VALIDATION_MESSAGE;

    fn app() -> App {
        App::new(Config::with_overrides("R"))
    }

    fn press(app: &mut App, code: KeyCode) -> AppAction {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn ctrl(app: &mut App, c: char) -> AppAction {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    /// Name -> Description -> Category -> Price
    fn fill_form(app: &mut App, name: &str, description: &str, price: &str) {
        press(app, KeyCode::Char('a'));
        type_text(app, name);
        press(app, KeyCode::Tab);
        type_text(app, description);
        press(app, KeyCode::Tab);
        press(app, KeyCode::Right);
        press(app, KeyCode::Tab);
        type_text(app, price);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press(&mut app(), KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(press(&mut app(), KeyCode::Esc), AppAction::Quit);
        assert_eq!(ctrl(&mut app(), 'c'), AppAction::Quit);
    }

    #[test]
    fn test_add_dish_through_keys() {
        let mut app = app();
        fill_form(&mut app, "Bobotie", "Spiced mince", "89.5");
        assert!(app.form.can_save());
        assert_eq!(ctrl(&mut app, 's'), AppAction::Continue);

        assert!(!app.form.is_open());
        let dish = &app.store.dishes()[0];
        assert_eq!(dish.name, "Bobotie");
        assert_eq!(dish.description, "Spiced mince");
        assert_eq!(dish.category, DishCategory::MainCourse);
        assert_eq!(dish.price.formatted(), "89.50");
    }

    #[test]
    fn test_enter_on_price_saves() {
        let mut app = app();
        fill_form(&mut app, "Soup", "", "7");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.dishes()[0].price.formatted(), "7.00");
    }

    #[test]
    fn test_typing_while_open_does_not_trigger_menu_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "q1l");
        assert!(app.form.is_open());
        assert!(!app.show_logs);
        assert_eq!(app.store.filter(), MenuFilter::All);
        assert_eq!(app.form.draft().unwrap().name, "q1l");
    }

    #[test]
    fn test_invalid_save_shows_alert() {
        let mut app = app();
        fill_form(&mut app, "Soup", "", "abc");
        ctrl(&mut app, 's');

        let alert = app.alert.as_ref().unwrap();
        assert_eq!(alert.message, VALIDATION_MESSAGE);
        assert!(app.store.is_empty());
        assert!(app.form.is_open());

        // Any key dismisses without editing the draft
        press(&mut app, KeyCode::Char('x'));
        assert!(app.alert.is_none());
        assert_eq!(app.form.draft().unwrap().price, "abc");
    }

    #[test]
    fn test_disabled_save_button_ignores_enter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        app.focus = FormFocus::Save;
        press(&mut app, KeyCode::Enter);
        assert!(app.alert.is_none());
        assert!(app.form.is_open());
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_escape_cancels_form() {
        let mut app = app();
        fill_form(&mut app, "Phantom", "", "5");
        assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Continue);
        assert!(!app.form.is_open());
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_reopen_resets_inputs_and_focus() {
        let mut app = app();
        fill_form(&mut app, "Leftover", "x", "1");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('a'));

        assert_eq!(app.focus, FormFocus::Name);
        assert_eq!(app.input(DraftField::Name).value(), "");
        assert_eq!(app.input(DraftField::Price).value(), "");
        assert_eq!(app.form.draft().unwrap().category, DishCategory::Starters);
    }

    #[test]
    fn test_description_enter_adds_newline() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Line one");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "two");
        assert_eq!(app.form.draft().unwrap().description, "Line one\ntwo");
    }

    #[test]
    fn test_description_newline_at_cursor() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ab");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "x");
        assert_eq!(app.form.draft().unwrap().description, "a\nxb");
        assert_eq!(app.input(DraftField::Description).cursor(), 3);
    }

    #[test]
    fn test_filter_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.store.filter(), MenuFilter::Only(DishCategory::Desserts));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.store.filter(), MenuFilter::All);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.store.filter(), MenuFilter::Only(DishCategory::Desserts));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.store.filter(), MenuFilter::Only(DishCategory::MainCourse));
    }

    #[test]
    fn test_category_number_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        app.focus = FormFocus::Category;
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.form.draft().unwrap().category, DishCategory::Desserts);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.form.draft().unwrap().category, DishCategory::Starters);
    }

    #[test]
    fn test_focus_cycle() {
        assert_eq!(FormFocus::Save.next(), FormFocus::Name);
        assert_eq!(FormFocus::Name.prev(), FormFocus::Save);
        assert_eq!(FormFocus::Category.field(), None);
        assert_eq!(FormFocus::Price.field(), Some(DraftField::Price));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(app.handle_key(key), AppAction::Continue);
    }
}
