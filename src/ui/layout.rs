//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SAVE_SHORTCUT;
use crate::state::{DesignerFocus, NoticeLevel, View, HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),     // Header
            Constraint::Min(0),                    // Content
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split the content area into the left and right columns of two-column views
pub fn split_columns(area: Rect) -> (Rect, Rect) {
    let left = crate::state::left_column_width(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the header with the app name and the current view
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Form Builder",
        Style::default().fg(Color::Cyan),
    )];

    if app.state.current_view != View::Listing {
        spans.push(Span::styled(" / ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            app.state.current_view.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(header, area);
}

/// Draw the status bar: the current notice, or key hints for the view
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.state.notice {
        Some(notice) => {
            let (symbol, color) = match notice.level {
                NoticeLevel::Success => ("✓", Color::Green),
                NoticeLevel::Warning => ("!", Color::Yellow),
                NoticeLevel::Error => ("✗", Color::Red),
            };
            Line::from(vec![
                Span::styled(format!(" {symbol} "), Style::default().fg(color)),
                Span::styled(&notice.message, Style::default().fg(color)),
            ])
        }
        None => Line::from(Span::styled(
            format!(" {}", get_view_hints(app)),
            Style::default().fg(Color::Gray),
        )),
    };

    let status = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right, preceded by a marker while requests are pending
    let quit_hint = if app.is_busy() {
        " Working...  ^C:quit "
    } else {
        " ^C:quit "
    };
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> String {
    match app.state.current_view {
        View::Listing => "j/k:nav  Enter/v:view  e:edit  d:delete  n:new  r:refresh  q:quit".into(),
        View::DesignerCreate | View::DesignerEdit => {
            let Some(page) = app.state.designer() else {
                return String::new();
            };
            if page.drag.is_some() {
                return "↑↓:move  Enter:drop  Esc:cancel".into();
            }
            match page.focus {
                DesignerFocus::AddMenu => "↑↓:choose  Enter:add  t/n/e/p/d:add type  Esc:close".into(),
                DesignerFocus::Fields => format!(
                    "Tab:focus  ↑↓:select  a:add  d:delete  m:move  {SAVE_SHORTCUT}:save  Esc:back"
                ),
                _ => format!("Tab:next  Enter:done  {SAVE_SHORTCUT}:save  Esc:leave"),
            }
        }
        View::Runtime => format!("Tab:next  Enter:submit  PgUp/PgDn:responses  {SAVE_SHORTCUT}:submit  Esc:back"),
    }
}
