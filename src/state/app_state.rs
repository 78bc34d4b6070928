//! Application state definitions

use super::designer::DesignerPage;
use super::listing::ListingPage;
use super::runtime::RuntimePage;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Delay before a deferred navigation or reload fires
pub const DEFERRED_ACTION_DELAY: Duration = Duration::from_millis(1500);

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Listing,
    DesignerCreate,
    DesignerEdit,
    Runtime,
}

impl View {
    /// Check if this view is a form editing view (skipped when going back)
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::DesignerCreate | View::DesignerEdit)
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Listing => "Forms",
            View::DesignerCreate => "Create Form",
            View::DesignerEdit => "Edit Form",
            View::Runtime => "Fill Form",
        }
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub form_id: Option<String>,
}

impl ViewParams {
    pub fn form(id: impl Into<String>) -> Self {
        Self {
            form_id: Some(id.into()),
        }
    }
}

/// State owned by the active view
#[derive(Debug, Clone)]
pub enum Page {
    Listing(ListingPage),
    Designer(DesignerPage),
    Runtime(RuntimePage),
}

impl Default for Page {
    fn default() -> Self {
        Page::Listing(ListingPage::new())
    }
}

impl Page {
    /// Fresh page state for `view`
    pub fn for_view(view: &View, params: &ViewParams) -> Self {
        let id = params.form_id.clone().unwrap_or_default();
        match view {
            View::Listing => Page::Listing(ListingPage::new()),
            View::DesignerCreate => Page::Designer(DesignerPage::new_create()),
            View::DesignerEdit => Page::Designer(DesignerPage::new_edit(id)),
            View::Runtime => Page::Runtime(RuntimePage::new(id)),
        }
    }
}

/// Severity of a status bar notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub created: Instant,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created) >= ttl
    }
}

/// Pending delete action awaiting confirmation
#[derive(Debug, Clone)]
pub struct PendingDeleteAction {
    pub form_id: String,
    pub title: String,
    /// `true` when "Delete" is highlighted, `false` for "Cancel"
    pub selected_option: bool,
}

impl PendingDeleteAction {
    pub fn new(form_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            title: title.into(),
            selected_option: false,
        }
    }
}

/// Work to run once a delay has passed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    ShowListing,
    ReloadForm(String),
}

#[derive(Debug, Clone)]
pub struct PendingAction {
    pub due: Instant,
    pub action: Deferred,
}

/// Global application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    pub page: Page,
    /// Bumped on every page entry; requests carry it so late results for a
    /// page that was left can be told apart
    pub page_generation: u64,
    /// Set when the active page still has to fetch its data
    pub needs_load: bool,

    // Feedback
    pub errors: VecDeque<String>,
    pub notice: Option<Notice>,

    pub pending_delete: Option<PendingDeleteAction>,
    pub pending_action: Option<PendingAction>,

    // Double-click tracking
    pub last_click_time: Option<Instant>,
    pub last_click_index: Option<usize>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            needs_load: true,
            ..Self::default()
        }
    }

    // Error queue

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    // Notices

    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notice = Some(Notice::new(level, message));
    }

    /// Drop the notice once it has been visible for `ttl`
    pub fn expire_notice(&mut self, now: Instant, ttl: Duration) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now, ttl)) {
            self.notice = None;
        }
    }

    // Deferred actions

    pub fn schedule(&mut self, action: Deferred, now: Instant) {
        self.pending_action = Some(PendingAction {
            due: now + DEFERRED_ACTION_DELAY,
            action,
        });
    }

    /// Take the pending action if it is due
    pub fn take_due_action(&mut self, now: Instant) -> Option<Deferred> {
        if self.pending_action.as_ref().is_some_and(|p| now >= p.due) {
            self.pending_action.take().map(|p| p.action)
        } else {
            None
        }
    }

    // Page access

    pub fn listing(&self) -> Option<&ListingPage> {
        match &self.page {
            Page::Listing(page) => Some(page),
            _ => None,
        }
    }

    pub fn listing_mut(&mut self) -> Option<&mut ListingPage> {
        match &mut self.page {
            Page::Listing(page) => Some(page),
            _ => None,
        }
    }

    pub fn designer(&self) -> Option<&DesignerPage> {
        match &self.page {
            Page::Designer(page) => Some(page),
            _ => None,
        }
    }

    pub fn designer_mut(&mut self) -> Option<&mut DesignerPage> {
        match &mut self.page {
            Page::Designer(page) => Some(page),
            _ => None,
        }
    }

    pub fn runtime(&self) -> Option<&RuntimePage> {
        match &self.page {
            Page::Runtime(page) => Some(page),
            _ => None,
        }
    }

    pub fn runtime_mut(&mut self) -> Option<&mut RuntimePage> {
        match &mut self.page {
            Page::Runtime(page) => Some(page),
            _ => None,
        }
    }
}
