//! Field rendering utilities for forms

use crate::state::TextInput;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a bordered single-line input holding `input`
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    placeholder: &str,
    is_active: bool,
) {
    draw_field_with_value(
        frame,
        area,
        label,
        &input.display_value(),
        placeholder,
        is_active,
    );
}

/// Draw a bordered single-line input showing `value`
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let mut spans = if value.is_empty() {
        let hint = if placeholder.is_empty() && !is_active {
            "(empty)"
        } else {
            placeholder
        };
        vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]
    } else {
        vec![Span::styled(value, style)]
    };
    if !value.is_empty() {
        spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
