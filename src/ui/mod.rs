//! UI module for rendering the TUI

mod components;
mod designer;
mod forms;
mod layout;
mod listing;
mod runtime;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::{render_confirm_dialog, render_error_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Listing => listing::draw(frame, main_area, app),
        View::DesignerCreate | View::DesignerEdit => designer::draw(frame, main_area, app),
        View::Runtime => runtime::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays, error dialog on top
    if let Some(action) = &app.state.pending_delete {
        render_confirm_dialog(frame, action);
    }
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.errors.len());
    }
}
