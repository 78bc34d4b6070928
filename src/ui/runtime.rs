//! Form runtime view: inputs on the left, prior responses on the right

use super::components::render_button;
use super::forms::draw_field;
use super::layout::split_columns;
use crate::app::App;
use crate::state::{
    format_submitted_at_local, visible_window, RuntimePage, RuntimeStatus, BOX_HEIGHT,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the runtime page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(page) = app.state.runtime() else {
        return;
    };

    match &page.status {
        RuntimeStatus::Loading => {
            let content = Paragraph::new("Loading form...")
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(content, area);
            return;
        }
        RuntimeStatus::Failed(message) => {
            let content = Paragraph::new(vec![
                Line::from(Span::styled(message.as_str(), Style::default().fg(Color::Red))),
                Line::from(""),
                Line::from(Span::styled(
                    "Press r to retry, Esc to go back.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(content, area);
            return;
        }
        RuntimeStatus::Ready => {}
    }

    let (left, right) = split_columns(area);
    draw_inputs(frame, left, page);
    draw_responses(frame, right, page);
}

fn draw_inputs(frame: &mut Frame, area: Rect, page: &RuntimePage) {
    let block = Block::default()
        .title(format!(" {} ", page.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !page.has_fields() {
        let content = Paragraph::new("No input fields available.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(content, inner);
        return;
    }

    // Every field plus the submit button, BOX_HEIGHT rows each
    let stops = page.fields.len() + 1;
    let capacity = (inner.height / BOX_HEIGHT) as usize;
    let offset = visible_window(stops, capacity, Some(page.focus_index));

    for (slot, index) in (offset..stops).take(capacity).enumerate() {
        let box_area = Rect {
            x: inner.x,
            y: inner.y + slot as u16 * BOX_HEIGHT,
            width: inner.width,
            height: BOX_HEIGHT,
        };
        let is_active = index == page.focus_index;

        match (page.fields.get(index), page.inputs.get(index)) {
            (Some(field), Some(input)) => {
                let label = format!("{} ({})", field.title, field.field_type);
                draw_field(frame, box_area, &label, input, &field.placeholder, is_active);
            }
            _ => {
                let button_area = Rect {
                    width: box_area.width.min(14),
                    ..box_area
                };
                render_button(frame, button_area, "Submit", is_active, true);
            }
        }
    }
}

fn draw_responses(frame: &mut Frame, area: Rect, page: &RuntimePage) {
    let block = Block::default()
        .title(format!(" Responses ({}) ", page.responses.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines: Vec<Line> = Vec::new();
    if page.responses.is_empty() {
        lines.push(Line::from(Span::styled(
            "No responses yet.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for response in &page.responses {
        lines.push(Line::from(vec![
            Span::styled("Submitted At: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_submitted_at_local(&response.submitted_at),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        for (key, value) in response.ordered_entries() {
            lines.push(Line::from(vec![
                Span::styled(format!("{key}: "), Style::default().fg(Color::Cyan)),
                Span::raw(value),
            ]));
        }
        lines.push(Line::from(""));
    }

    let scroll = page.scroll as u16;
    let content = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(content, area);
}
