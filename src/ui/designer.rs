//! Form designer view (create and edit)
//!
//! Layout:
//! +------------------------------+---------------------+
//! | Form Title                   | Field Properties    |
//! +------------------------------+  Title              |
//! | Fields                       |  Placeholder        |
//! |  1. [text] Name              |  [+ Add Field]      |
//! |  2. [email] Email            |   t  text           |
//! |                              |   n  number ...     |
//! +------------------------------+---------------------+

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::{draw_field, draw_field_with_value};
use super::layout::split_columns;
use crate::app::App;
use crate::state::{
    visible_window, DesignerFocus, DesignerLoad, DesignerPage, FieldType, BOX_HEIGHT, MAX_FIELDS,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the designer page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(page) = app.state.designer() else {
        return;
    };

    match page.load {
        DesignerLoad::Loading => {
            draw_message(frame, area, "Loading form...", Color::DarkGray);
            return;
        }
        DesignerLoad::NotFound => {
            draw_message(frame, area, "Form not found.\n\nPress Esc to go back.", Color::Red);
            return;
        }
        DesignerLoad::Ready => {}
    }

    let (left, right) = split_columns(area);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(BOX_HEIGHT), Constraint::Min(0)])
        .split(left);

    draw_field(
        frame,
        left_chunks[0],
        "Form Title",
        &page.title,
        "Untitled Form",
        page.focus == DesignerFocus::FormTitle,
    );
    draw_field_list(frame, left_chunks[1], page);
    draw_properties(frame, right, page);
}

fn draw_message(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let content = Paragraph::new(message)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(content, area);
}

/// Field list, one row per field
fn draw_field_list(frame: &mut Frame, area: Rect, page: &DesignerPage) {
    let is_focused = page.focus == DesignerFocus::Fields || page.drag.is_some();
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" Fields ({}/{MAX_FIELDS}) ", page.editor.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if page.editor.is_empty() {
        let hint = Paragraph::new("No fields yet. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, inner);
        return;
    }

    let capacity = inner.height as usize;
    let offset = visible_window(page.editor.len(), capacity, page.focus_row());
    let drag_target = page.drag.as_ref().and_then(|d| d.target.as_ref());
    let drag_source = page.drag.as_ref().map(|d| &d.source);

    let lines: Vec<Line> = page
        .editor
        .fields()
        .iter()
        .enumerate()
        .skip(offset)
        .take(capacity)
        .map(|(idx, field)| {
            let is_selected = page.editor.is_selected(&field.key);
            let marker = if drag_target == Some(&field.key) {
                Span::styled("→ ", Style::default().fg(Color::Yellow))
            } else if drag_source == Some(&field.key) {
                Span::styled("≡ ", Style::default().fg(Color::Yellow))
            } else if is_selected {
                Span::styled("▸ ", Style::default().fg(Color::Cyan))
            } else {
                Span::raw("  ")
            };
            let title_style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Line::from(vec![
                marker,
                Span::styled(
                    format!("{:>2}. ", idx + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("[{}] ", field.field_type),
                    Style::default().fg(Color::Blue),
                ),
                Span::styled(field.title.clone(), title_style),
                Span::styled(
                    format!("  {}", field.placeholder),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Properties of the selected field plus the "Add Field" menu
fn draw_properties(frame: &mut Frame, area: Rect, page: &DesignerPage) {
    let block = Block::default()
        .title(" Field Properties ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BOX_HEIGHT),    // Title
            Constraint::Length(BOX_HEIGHT),    // Placeholder
            Constraint::Length(BUTTON_HEIGHT), // Add Field
            Constraint::Min(0),                // Menu
        ])
        .split(inner);

    match page.editor.selected_field() {
        Some(field) => {
            draw_field_with_value(
                frame,
                chunks[0],
                "Title",
                &field.title,
                &field.field_type.default_title(),
                page.focus == DesignerFocus::FieldTitle,
            );
            draw_field_with_value(
                frame,
                chunks[1],
                "Placeholder",
                &field.placeholder,
                &field.field_type.default_placeholder(),
                page.focus == DesignerFocus::FieldPlaceholder,
            );
        }
        None => {
            draw_field_with_value(frame, chunks[0], "Title", "", "Select a field", false);
            draw_field_with_value(frame, chunks[1], "Placeholder", "", "Select a field", false);
        }
    }

    let label = if page.show_add_menu {
        "− Add Field"
    } else {
        "+ Add Field"
    };
    render_button(
        frame,
        chunks[2],
        label,
        page.focus == DesignerFocus::AddMenu,
        page.editor.len() < MAX_FIELDS,
    );

    if page.show_add_menu {
        let items: Vec<Line> = FieldType::ALL
            .iter()
            .enumerate()
            .map(|(idx, field_type)| {
                let is_highlighted = idx == page.add_menu_index;
                let style = if is_highlighted {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", field_type.shortcut()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(format!(" {field_type}"), style),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(items), chunks[3]);
    }
}
