//! Screen layout
//!
//! ```text
//! ┌ header: Menu (n) ─────────── + Add Dish (a) ┐
//! │ All │ Starters │ Main Course │ Desserts      │
//! ┌ Showing: <filter> (n items) ─────────────────┐
//! │ dish list / empty state                      │
//! └──────────────────────────────────────────────┘
//! [logs]
//! key help
//! ```
//!
//! The add-dish dialog and the validation alert are drawn on top.

use super::app::{App, FormFocus};
use crate::menu::{DraftField, VALIDATION_ALERT_TITLE};
use ratatui::layout::Margin;
use ratatui::{prelude::*, widgets::*};
use shared::models::{DishCategory, MenuFilter};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

const ACCENT: Color = Color::Cyan;

pub fn draw(f: &mut Frame, app: &mut App) {
    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Length(3), // Filter bar
        Constraint::Min(5),    // Dish list
    ];
    if app.show_logs {
        constraints.push(Constraint::Length(8));
    }
    constraints.push(Constraint::Length(1)); // Help

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_filter_bar(f, app, chunks[1]);
    draw_dish_list(f, app, chunks[2]);
    if app.show_logs {
        draw_logs(f, app, chunks[3]);
    }
    draw_help(f, app, chunks[chunks.len() - 1]);

    if app.form.is_open() {
        draw_form(f, app);
    }
    if app.alert.is_some() {
        draw_alert(f, app);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    let title = Paragraph::new(Line::from(vec![Span::styled(
        app.store.header_title(),
        Style::default().add_modifier(Modifier::BOLD),
    )]))
    .block(block);
    f.render_widget(title, area);

    let add = Paragraph::new(Line::from(vec![
        Span::styled("+ Add Dish", Style::default().fg(Color::Green)),
        Span::styled(" (a) ", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(add, area.inner(Margin::new(1, 1)));
}

fn draw_filter_bar(f: &mut Frame, app: &App, area: Rect) {
    let titles = MenuFilter::ALL
        .iter()
        .enumerate()
        .map(|(i, filter)| format!("{} {}", i + 1, filter.label()));

    let tabs = Tabs::new(titles)
        .select(app.store.filter().index())
        .block(Block::default().borders(Borders::ALL).title(" Filter "))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn draw_dish_list(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.store.summary_line()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if app.store.filtered_count() == 0 {
        let empty = Paragraph::new(app.store.empty_state_message())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let currency = app.config.currency_symbol.as_str();
    let items: Vec<ListItem> = app
        .store
        .filtered_dishes()
        .map(|dish| {
            let description_style = if dish.description.is_empty() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default()
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(dish.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(dish.display_price(currency), Style::default().fg(Color::Green)),
            ])];
            lines.extend(
                dish.display_description()
                    .lines()
                    .map(|l| Line::from(Span::styled(l.to_string(), description_style))),
            );
            lines.push(Line::from(Span::styled(
                format!("Category: {}", dish.category),
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(""));

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn draw_help(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.form.is_open() {
        "Tab/↑↓ move  ←→ course  Enter next/save  Ctrl+S save  Esc cancel"
    } else {
        "a add dish  1-4/←→ filter  ↑↓ scroll  l logs  q quit"
    };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn draw_form(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 21, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add New Dish ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(6), // Description
            Constraint::Length(3), // Course
            Constraint::Length(3), // Price
            Constraint::Length(1), // Buttons
        ])
        .split(inner);

    draw_text_field(f, app, rows[0], DraftField::Name, " Dish Name ", "e.g., Spicy Tuna Roll");
    draw_text_field(
        f,
        app,
        rows[1],
        DraftField::Description,
        " Description ",
        "Briefly describe the dish",
    );
    draw_category_picker(f, app, rows[2]);
    draw_text_field(f, app, rows[3], DraftField::Price, " Price ", "e.g., 12.99");
    draw_buttons(f, app, rows[4]);
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style)
}

fn draw_text_field(
    f: &mut Frame,
    app: &App,
    area: Rect,
    field: DraftField,
    title: &'static str,
    placeholder: &'static str,
) {
    let focused = app.focus.field() == Some(field);
    let input = app.input(field);
    let block = field_block(title, focused);

    if input.value().is_empty() && !focused {
        let hint = Paragraph::new(placeholder)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    if field == DraftField::Description {
        let width = area.width.saturating_sub(2) as usize;
        let height = area.height.saturating_sub(2) as usize;
        let (rows, (col, row)) = wrap_at_cursor(input.value(), input.cursor(), width);
        let scroll = (row + 1).saturating_sub(height);

        let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
        let text = Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .block(block);
        f.render_widget(text, area);

        if focused {
            f.set_cursor_position((
                area.x + 1 + col.min(width.saturating_sub(1)) as u16,
                area.y + 1 + row.saturating_sub(scroll) as u16,
            ));
        }
        return;
    }

    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    let text = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(block);
    f.render_widget(text, area);

    if focused {
        f.set_cursor_position((
            area.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

/// Hard-wrap `text` into rows of at most `width` chars, breaking at newlines,
/// and find the `(column, row)` of the char index `cursor`.
fn wrap_at_cursor(text: &str, cursor: usize, width: usize) -> (Vec<String>, (usize, usize)) {
    let width = width.max(1);
    let mut rows = vec![String::new()];
    let mut col = 0;
    let mut at = None;

    for (i, c) in text.chars().enumerate() {
        if c != '\n' && col == width {
            rows.push(String::new());
            col = 0;
        }
        if i == cursor {
            at = Some((col, rows.len() - 1));
        }
        if c == '\n' {
            rows.push(String::new());
            col = 0;
        } else if let Some(row) = rows.last_mut() {
            row.push(c);
            col += 1;
        }
    }

    let at = match at {
        Some(at) => at,
        None if col == width => {
            rows.push(String::new());
            (0, rows.len() - 1)
        }
        None => (col, rows.len() - 1),
    };
    (rows, at)
}

fn draw_category_picker(f: &mut Frame, app: &App, area: Rect) {
    let selected = app
        .form
        .draft()
        .map(|d| d.category)
        .unwrap_or_default();
    let focused = app.focus == FormFocus::Category;

    let mut spans = Vec::new();
    for (i, category) in DishCategory::ALL.iter().enumerate() {
        let style = if *category == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, category.label()), style));
        spans.push(Span::raw(" "));
    }

    let picker = Paragraph::new(Line::from(spans)).block(field_block(" Select Course ", focused));
    f.render_widget(picker, area);
}

fn draw_buttons(f: &mut Frame, app: &App, area: Rect) {
    let can_save = app.form.can_save();

    let focus_mod = |target: FormFocus| {
        if app.focus == target {
            Modifier::REVERSED
        } else {
            Modifier::empty()
        }
    };

    let cancel = Span::styled(
        "[ Cancel ]",
        Style::default()
            .fg(Color::Red)
            .add_modifier(focus_mod(FormFocus::Cancel)),
    );
    let save_style = if can_save {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    let save = Span::styled("[ Save Dish ]", save_style.add_modifier(focus_mod(FormFocus::Save)));

    let buttons = Paragraph::new(Line::from(vec![cancel, Span::raw("   "), save]))
        .alignment(Alignment::Right);
    f.render_widget(buttons, area);
}

fn draw_alert(f: &mut Frame, app: &App) {
    let Some(alert) = &app.alert else {
        return;
    };
    let title = if alert.is_validation() {
        VALIDATION_ALERT_TITLE
    } else {
        "Error"
    };

    let area = centered_rect(50, 7, f.area());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(popup, area);
}

/// Rectangle of `percent_x` width and fixed `height`, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
