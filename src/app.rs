//! Application state and core logic

use crate::api::FormsApi;
use crate::platform::is_save_key;
use crate::spawn::{self, ApiEvent};
use crate::state::{
    designer_panel_target, left_column_width, visible_window, AppState, Deferred, DesignerFocus,
    DesignerPage, FieldType, NoticeLevel, Page, PanelTarget, PendingDeleteAction, UiArea, View,
    ViewParams, BOX_HEIGHT,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Capacity of the channel carrying finished requests back to the loop
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Forms service client, shared with request tasks
    api: Arc<dyn FormsApi>,
    /// Request tasks report back through this channel
    event_tx: mpsc::Sender<ApiEvent>,
    event_rx: mpsc::Receiver<ApiEvent>,
    /// Requests started but not yet reported back
    in_flight: usize,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// How long status bar notices stay visible
    notice_ttl: Duration,
}

/// Follow-up a designer key asks of the app
enum DesignerOutcome {
    Handled,
    Warn(String),
    Back,
}

impl App {
    /// Create a new App instance starting on the listing
    pub fn new(api: Arc<dyn FormsApi>, notice_ttl: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: AppState::new(),
            api,
            event_tx,
            event_rx,
            in_flight: 0,
            quit: false,
            terminal_size: None,
            notice_ttl,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether any request is still pending
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    fn terminal_dims(&self) -> (u16, u16) {
        self.terminal_size.unwrap_or((24, 80))
    }

    // Navigation

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        self.state.view_history.push((
            self.state.current_view.clone(),
            self.state.view_params.clone(),
        ));
        self.enter(view, params);
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last non-form view
        while let Some((view, params)) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.enter(view, params);
            return;
        }
        self.enter(View::Listing, ViewParams::default());
    }

    /// Return to the listing with a fresh history
    fn show_listing(&mut self) {
        self.state.view_history.clear();
        self.enter(View::Listing, ViewParams::default());
    }

    fn enter(&mut self, view: View, params: ViewParams) {
        self.state.page = Page::for_view(&view, &params);
        self.state.page_generation = self.state.page_generation.wrapping_add(1);
        self.state.current_view = view;
        self.state.view_params = params;
        self.state.needs_load = true;
        self.state.pending_delete = None;
        self.state.pending_action = None;
        self.state.last_click_index = None;
    }

    // Requests

    /// Handles for a new request issued on behalf of the current page
    fn request(&mut self) -> (Arc<dyn FormsApi>, mpsc::Sender<ApiEvent>, u64) {
        self.in_flight += 1;
        (
            Arc::clone(&self.api),
            self.event_tx.clone(),
            self.state.page_generation,
        )
    }

    /// Start fetching whatever the current page is waiting for
    pub fn load_current_page(&mut self) {
        self.state.needs_load = false;
        let form_id = self.state.view_params.form_id.clone().unwrap_or_default();

        match self.state.current_view {
            View::Listing => {
                let (api, tx, page) = self.request();
                spawn::spawn_list_forms(api, tx, page);
            }
            View::DesignerCreate => {}
            View::DesignerEdit | View::Runtime => {
                let (api, tx, page) = self.request();
                spawn::spawn_get_form(api, tx, page, form_id);
            }
        }
    }

    /// Apply every request result that has arrived since the last pass
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_api_event(event);
        }
    }

    fn handle_api_event(&mut self, event: ApiEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if event.page() != self.state.page_generation {
            tracing::debug!("Dropping result for a page that is no longer shown: {event:?}");
            return;
        }

        match event {
            ApiEvent::FormsListed { result, .. } => {
                let forms = match result {
                    Ok(forms) => forms,
                    Err(e) => {
                        tracing::warn!("Failed to list forms: {e}");
                        self.state
                            .notify(NoticeLevel::Error, "Failed to load forms.");
                        Vec::new()
                    }
                };
                if let Some(page) = self.state.listing_mut() {
                    page.set_forms(forms);
                }
            }
            ApiEvent::FormLoaded {
                form_id, result, ..
            } => {
                let form = result
                    .inspect_err(|e| tracing::warn!("Failed to load form {form_id}: {e}"))
                    .ok();
                match &mut self.state.page {
                    Page::Designer(page) => page.apply_loaded(form),
                    Page::Runtime(page) => page.apply_loaded(form),
                    Page::Listing(_) => {}
                }
            }
            ApiEvent::FormSaved {
                form_id, result, ..
            } => {
                if let Err(e) = &result {
                    let id = form_id.as_deref().unwrap_or("(new)");
                    tracing::warn!("Failed to save form {id}: {e}");
                }
                self.finish_save(form_id.is_none(), result.is_ok());
            }
            ApiEvent::FormDeleted {
                form_id, result, ..
            } => match result {
                Ok(()) => {
                    if let Some(page) = self.state.listing_mut() {
                        page.remove_form(&form_id);
                    }
                    self.state
                        .notify(NoticeLevel::Success, "Form deleted successfully!");
                }
                Err(e) => {
                    tracing::warn!("Failed to delete form {form_id}: {e}");
                    self.push_error("Failed to delete form");
                }
            },
            ApiEvent::ResponseSubmitted {
                form_id, result, ..
            } => {
                if let Some(page) = self.state.runtime_mut() {
                    page.submitting = false;
                }
                match result {
                    Ok(()) => {
                        self.state
                            .notify(NoticeLevel::Success, "Form submitted successfully!");
                        self.state
                            .schedule(Deferred::ReloadForm(form_id), Instant::now());
                    }
                    Err(e) => {
                        tracing::warn!("Failed to submit form {form_id}: {e}");
                        self.push_error("Failed to submit form.");
                    }
                }
            }
        }
    }

    /// Expire notices and run deferred actions that are due
    pub fn tick(&mut self, now: Instant) {
        self.state.expire_notice(now, self.notice_ttl);

        match self.state.take_due_action(now) {
            Some(Deferred::ShowListing) => self.show_listing(),
            Some(Deferred::ReloadForm(id)) => {
                if self.state.runtime().is_some_and(|p| p.form_id == id) {
                    self.state.needs_load = true;
                }
            }
            None => {}
        }
    }

    // Keyboard

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle delete confirmation (modal)
        if self.state.pending_delete.is_some() {
            self.handle_confirm_key(key);
            return Ok(());
        }

        match self.state.current_view {
            View::Listing => self.handle_listing_key(key),
            View::DesignerCreate | View::DesignerEdit => self.handle_designer_key(key),
            View::Runtime => self.handle_runtime_key(key),
        }

        Ok(())
    }

    /// Handle keys in the forms listing
    fn handle_listing_key(&mut self, key: KeyEvent) {
        let selected = self
            .state
            .listing()
            .and_then(|page| page.selected_form())
            .cloned();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if let Some(page) = self.state.listing_mut() {
                    page.move_selection_down();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if let Some(page) = self.state.listing_mut() {
                    page.move_selection_up();
                }
            }
            KeyCode::Char('n') => self.navigate(View::DesignerCreate, ViewParams::default()),
            KeyCode::Enter | KeyCode::Char('v') => {
                if let Some(form) = selected {
                    self.navigate(View::Runtime, ViewParams::form(form.id));
                }
            }
            KeyCode::Char('e') => {
                if let Some(form) = selected {
                    self.navigate(View::DesignerEdit, ViewParams::form(form.id));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(form) = selected {
                    self.state.pending_delete = Some(PendingDeleteAction::new(form.id, form.title));
                }
            }
            KeyCode::Char('r') => self.state.needs_load = true,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the delete confirmation dialog
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => {
                if let Some(action) = self.state.pending_delete.as_mut() {
                    action.selected_option = !action.selected_option;
                }
            }
            KeyCode::Enter => {
                if let Some(action) = self.state.pending_delete.take() {
                    if action.selected_option {
                        self.delete_form(action.form_id);
                    }
                }
            }
            KeyCode::Char('y') => {
                if let Some(action) = self.state.pending_delete.take() {
                    self.delete_form(action.form_id);
                }
            }
            KeyCode::Esc | KeyCode::Char('n') => self.state.pending_delete = None,
            _ => {}
        }
    }

    /// Start deleting a form; the listing only changes once the service confirmed
    fn delete_form(&mut self, form_id: String) {
        let (api, tx, page) = self.request();
        spawn::spawn_delete_form(api, tx, page, form_id);
    }

    /// Handle keys in the form designer
    fn handle_designer_key(&mut self, key: KeyEvent) {
        if is_save_key(&key) {
            self.submit_designer();
            return;
        }
        let Some(page) = self.state.designer_mut() else {
            return;
        };

        let outcome = if !page.is_ready() {
            if key.code == KeyCode::Esc {
                DesignerOutcome::Back
            } else {
                DesignerOutcome::Handled
            }
        } else if page.drag.is_some() {
            designer_drag_key(page, key);
            DesignerOutcome::Handled
        } else {
            match key.code {
                KeyCode::Tab => {
                    page.next_focus();
                    DesignerOutcome::Handled
                }
                KeyCode::BackTab => {
                    page.prev_focus();
                    DesignerOutcome::Handled
                }
                _ => match page.focus {
                    DesignerFocus::AddMenu => designer_menu_key(page, key),
                    DesignerFocus::Fields => designer_list_key(page, key),
                    _ => designer_text_key(page, key),
                },
            }
        };

        match outcome {
            DesignerOutcome::Handled => {}
            DesignerOutcome::Warn(message) => self.state.notify(NoticeLevel::Warning, message),
            DesignerOutcome::Back => self.go_back(),
        }
    }

    /// Start creating or updating the form being designed
    fn submit_designer(&mut self) {
        let Some(page) = self.state.designer_mut() else {
            return;
        };
        if page.saved || page.saving || !page.is_ready() {
            return;
        }
        let payload = match page.prepare_submission() {
            Ok(payload) => payload,
            Err(warning) => {
                self.state.notify(NoticeLevel::Warning, warning);
                return;
            }
        };
        page.saving = true;
        let form_id = page.form_id().map(str::to_string);

        let (api, tx, generation) = self.request();
        spawn::spawn_save_form(api, tx, generation, form_id, payload);
    }

    /// Apply the outcome of a create or update
    fn finish_save(&mut self, created: bool, succeeded: bool) {
        let (success, failure) = if created {
            ("Form created successfully!", "Failed to create form.")
        } else {
            ("Form updated successfully!", "Failed to update form.")
        };
        let Some(page) = self.state.designer_mut() else {
            return;
        };
        page.saving = false;

        if succeeded {
            page.saved = true;
            self.state.notify(NoticeLevel::Success, success);
            self.state.schedule(Deferred::ShowListing, Instant::now());
        } else {
            self.push_error(failure);
        }
    }

    /// Handle keys in the form runtime
    fn handle_runtime_key(&mut self, key: KeyEvent) {
        if is_save_key(&key) {
            self.submit_runtime();
            return;
        }
        let Some(page) = self.state.runtime_mut() else {
            return;
        };

        if !page.is_ready() {
            match key.code {
                KeyCode::Esc => self.go_back(),
                KeyCode::Char('r') => self.state.needs_load = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab | KeyCode::Down => page.next_focus(),
            KeyCode::BackTab | KeyCode::Up => page.prev_focus(),
            KeyCode::PageDown => page.scroll_down(),
            KeyCode::PageUp => page.scroll_up(),
            KeyCode::Enter => {
                if page.on_submit_button() {
                    self.submit_runtime();
                } else {
                    page.next_focus();
                }
            }
            KeyCode::Backspace => page.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                page.input_char(c)
            }
            _ => {}
        }
    }

    /// Validate and start submitting a response to the current form
    fn submit_runtime(&mut self) {
        let Some(page) = self.state.runtime_mut() else {
            return;
        };
        if !page.is_ready() || !page.has_fields() || page.submitting {
            return;
        }
        let payload = match page.prepare_submission() {
            Ok(payload) => payload,
            Err(violation) => {
                self.state
                    .notify(NoticeLevel::Warning, violation.to_string());
                return;
            }
        };
        page.submitting = true;
        let form_id = page.form_id.clone();

        let (api, tx, generation) = self.request();
        spawn::spawn_submit_response(api, tx, generation, form_id, payload);
    }

    // Mouse

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() || self.state.pending_delete.is_some() {
            return Ok(());
        }

        match self.state.current_view {
            View::Listing => self.handle_listing_mouse(mouse),
            View::DesignerCreate | View::DesignerEdit => self.handle_designer_mouse(mouse),
            View::Runtime => self.handle_runtime_mouse(mouse),
        }
        Ok(())
    }

    /// Index of the listing row under `mouse_row`, if any
    fn listing_index_at(&self, mouse_row: u16) -> Option<usize> {
        let page = self.state.listing()?;
        if !UiArea::ListContent.contains_row(mouse_row) {
            return None;
        }
        let (height, _) = self.terminal_dims();
        let capacity = UiArea::ListContent.visible_rows(height) as usize;
        let relative = UiArea::ListContent.relative_row(mouse_row) as usize;
        if relative >= capacity {
            return None;
        }
        let offset = visible_window(page.forms.len(), capacity, Some(page.selected_index));
        let index = offset + relative;
        (index < page.forms.len()).then_some(index)
    }

    fn handle_listing_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                if let Some(page) = self.state.listing_mut() {
                    page.move_selection_up();
                }
            }
            MouseEventKind::ScrollDown => {
                if let Some(page) = self.state.listing_mut() {
                    page.move_selection_down();
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(index) = self.listing_index_at(mouse.row) else {
                    return;
                };
                // Check for double-click: same index clicked within the window
                let is_double_click = self.state.last_click_index == Some(index)
                    && self
                        .state
                        .last_click_time
                        .is_some_and(|t| t.elapsed() < DOUBLE_CLICK_WINDOW);

                if let Some(page) = self.state.listing_mut() {
                    page.select(index);
                }

                if is_double_click {
                    self.state.last_click_index = None;
                    self.state.last_click_time = None;
                    let selected = self.state.listing().and_then(|p| p.selected_form()).cloned();
                    if let Some(form) = selected {
                        self.navigate(View::Runtime, ViewParams::form(form.id));
                    }
                } else {
                    self.state.last_click_index = Some(index);
                    self.state.last_click_time = Some(Instant::now());
                }
            }
            _ => {}
        }
    }

    /// Index of the designer field row under `mouse_row`, if any
    fn designer_field_at(&self, page: &DesignerPage, mouse_row: u16) -> Option<usize> {
        if !UiArea::DesignerFields.contains_row(mouse_row) {
            return None;
        }
        let (height, _) = self.terminal_dims();
        let capacity = UiArea::DesignerFields.visible_rows(height) as usize;
        let relative = UiArea::DesignerFields.relative_row(mouse_row) as usize;
        if relative >= capacity {
            return None;
        }
        let offset = visible_window(page.editor.len(), capacity, page.focus_row());
        let index = offset + relative;
        (index < page.editor.len()).then_some(index)
    }

    fn handle_designer_mouse(&mut self, mouse: MouseEvent) {
        let (_, width) = self.terminal_dims();
        let in_left_column = mouse.column < left_column_width(width);
        let hovered = self
            .state
            .designer()
            .and_then(|page| self.designer_field_at(page, mouse.row));
        let title_box = UiArea::Content.start_y()..UiArea::DesignerFields.start_y() - 1;

        let Some(page) = self.state.designer_mut() else {
            return;
        };
        if !page.is_ready() {
            return;
        }

        let mut warning = None;
        match mouse.kind {
            MouseEventKind::ScrollUp if in_left_column => page.editor.select_prev(),
            MouseEventKind::ScrollDown if in_left_column => page.editor.select_next(),
            MouseEventKind::Down(MouseButton::Left) if in_left_column => {
                page.show_add_menu = false;
                if title_box.contains(&mouse.row) {
                    page.focus = DesignerFocus::FormTitle;
                } else if let Some(key) = hovered.and_then(|i| page.editor.key_at(i)).cloned() {
                    page.editor.select(&key);
                    page.focus = DesignerFocus::Fields;
                    page.begin_drag();
                } else {
                    // Empty space below the fields
                    page.clear_selection();
                    page.focus = DesignerFocus::Fields;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let menu_len = if page.show_add_menu {
                    FieldType::ALL.len()
                } else {
                    0
                };
                match designer_panel_target(mouse.row, menu_len) {
                    Some(PanelTarget::FieldTitle) if page.editor.selected_key().is_some() => {
                        page.focus = DesignerFocus::FieldTitle;
                        page.show_add_menu = false;
                    }
                    Some(PanelTarget::FieldPlaceholder)
                        if page.editor.selected_key().is_some() =>
                    {
                        page.focus = DesignerFocus::FieldPlaceholder;
                        page.show_add_menu = false;
                    }
                    Some(PanelTarget::AddToggle) => page.toggle_add_menu(),
                    Some(PanelTarget::MenuItem(index)) => {
                        page.add_menu_index = index;
                        if let Err(e) = page.add_field(page.menu_field_type()) {
                            warning = Some(e.to_string());
                        }
                    }
                    _ => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                page.hover_drag(if in_left_column { hovered } else { None });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if page.drag.is_some() {
                    page.hover_drag(if in_left_column { hovered } else { None });
                    page.drop_drag();
                }
            }
            _ => {}
        }

        if let Some(message) = warning {
            self.state.notify(NoticeLevel::Warning, message);
        }
    }

    /// Focus stop of the runtime input box under `mouse_row`, if any
    fn runtime_stop_at(&self, mouse_row: u16) -> Option<usize> {
        let page = self.state.runtime()?;
        if !page.has_fields() || !UiArea::RuntimeInputs.contains_row(mouse_row) {
            return None;
        }
        let (height, _) = self.terminal_dims();
        let capacity = (UiArea::RuntimeInputs.visible_rows(height) / BOX_HEIGHT) as usize;
        let relative = (UiArea::RuntimeInputs.relative_row(mouse_row) / BOX_HEIGHT) as usize;
        if relative >= capacity {
            return None;
        }
        let stops = page.fields.len() + 1;
        let offset = visible_window(stops, capacity, Some(page.focus_index));
        let index = offset + relative;
        (index < stops).then_some(index)
    }

    fn handle_runtime_mouse(&mut self, mouse: MouseEvent) {
        let (_, width) = self.terminal_dims();
        let in_left_column = mouse.column < left_column_width(width);
        let stop = self.runtime_stop_at(mouse.row);

        let Some(page) = self.state.runtime_mut() else {
            return;
        };
        if !page.is_ready() {
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp if !in_left_column => page.scroll_up(),
            MouseEventKind::ScrollDown if !in_left_column => page.scroll_down(),
            MouseEventKind::ScrollUp => page.prev_focus(),
            MouseEventKind::ScrollDown => page.next_focus(),
            MouseEventKind::Down(MouseButton::Left) if in_left_column => {
                if let Some(index) = stop {
                    page.focus(index);
                    if page.on_submit_button() {
                        self.submit_runtime();
                    }
                }
            }
            _ => {}
        }
    }
}

/// Keys while a field is picked up
fn designer_drag_key(page: &mut DesignerPage, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => page.move_drag(-1),
        KeyCode::Down | KeyCode::Char('j') => page.move_drag(1),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') => page.drop_drag(),
        KeyCode::Esc => page.cancel_drag(),
        _ => {}
    }
}

/// Keys while the "Add Field" menu has focus
fn designer_menu_key(page: &mut DesignerPage, key: KeyEvent) -> DesignerOutcome {
    let field_type = match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            page.prev_menu_item();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            page.next_menu_item();
            None
        }
        KeyCode::Enter => Some(page.menu_field_type()),
        KeyCode::Esc | KeyCode::Char('a') => {
            page.toggle_add_menu();
            None
        }
        KeyCode::Char(c) => FieldType::from_shortcut(c),
        _ => None,
    };

    match field_type.map(|t| page.add_field(t)) {
        Some(Err(e)) => DesignerOutcome::Warn(e.to_string()),
        _ => DesignerOutcome::Handled,
    }
}

/// Keys while the field list has focus
fn designer_list_key(page: &mut DesignerPage, key: KeyEvent) -> DesignerOutcome {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => page.editor.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => page.editor.select_next(),
        KeyCode::Enter => {
            if page.editor.selected_key().is_some() {
                page.focus = DesignerFocus::FieldTitle;
            }
        }
        KeyCode::Char('a') => page.toggle_add_menu(),
        KeyCode::Char('d') | KeyCode::Delete => page.remove_selected(),
        KeyCode::Char('m') | KeyCode::Char(' ') => page.begin_drag(),
        KeyCode::Esc => {
            if page.editor.selected_key().is_some() {
                page.clear_selection();
            } else {
                return DesignerOutcome::Back;
            }
        }
        _ => {}
    }
    DesignerOutcome::Handled
}

/// Keys while a text input (form title or field property) has focus
fn designer_text_key(page: &mut DesignerPage, key: KeyEvent) -> DesignerOutcome {
    match key.code {
        KeyCode::Esc => {
            if page.focus == DesignerFocus::FormTitle {
                page.focus = DesignerFocus::Fields;
            } else {
                page.clear_selection();
            }
        }
        KeyCode::Enter => page.focus = DesignerFocus::Fields,
        KeyCode::Backspace => page.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => page.input_char(c),
        _ => {}
    }
    DesignerOutcome::Handled
}
