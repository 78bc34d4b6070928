//! Forms listing view

use super::widgets::render_scrollable_list;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const ACTIONS_HINT: &str = "View · Edit · Delete";

/// Draw the forms list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Forms ")
        .title_bottom(Line::from(vec![
            Span::styled(" n ", Style::default().fg(Color::Cyan)),
            Span::raw("Create New Form "),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(page) = app.state.listing() else {
        frame.render_widget(block, area);
        return;
    };

    if !page.loaded || page.forms.is_empty() {
        let message = if page.loaded {
            "No forms yet.\nPress 'n' to create a new form."
        } else {
            "Loading forms..."
        };
        let content = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    // Inner width minus borders, prefix and spacing
    let inner_width = area.width.saturating_sub(2) as usize;
    let title_width = inner_width.saturating_sub(ACTIONS_HINT.chars().count() + 3);

    let items: Vec<ListItem> = page
        .forms
        .iter()
        .enumerate()
        .map(|(idx, form)| {
            let is_selected = idx == page.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let title = if form.title.is_empty() {
                "(untitled)".to_string()
            } else {
                form.title.clone()
            };
            let shown: String = title.chars().take(title_width).collect();
            let pad = title_width.saturating_sub(shown.chars().count());

            let mut spans = vec![
                Span::styled(prefix, Style::default().fg(Color::Cyan)),
                Span::styled(shown, style),
            ];
            if is_selected {
                spans.push(Span::raw(" ".repeat(pad + 1)));
                spans.push(Span::styled(
                    ACTIONS_HINT,
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)));

    render_scrollable_list(frame, area, list, page.selected_index);
}
