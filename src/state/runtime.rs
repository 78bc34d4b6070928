//! Form runtime page state: fill in a form and review prior responses

use super::form::{FieldRecord, FieldType, FormRecord, ResponseRecord, SubmissionPayload};
use super::input::TextInput;
use super::validation::{validate_responses, ValidationError};
use std::collections::BTreeMap;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load form. Please try again.";

/// Load status of the runtime page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Runtime page state
#[derive(Debug, Clone)]
pub struct RuntimePage {
    pub form_id: String,
    pub status: RuntimeStatus,
    pub title: String,
    pub fields: Vec<FieldRecord>,
    /// One input per field, same order as `fields`
    pub inputs: Vec<TextInput>,
    pub responses: Vec<ResponseRecord>,
    /// Focused input; `fields.len()` is the submit button
    pub focus_index: usize,
    /// First visible line of the responses panel
    pub scroll: usize,
    /// A submission is in flight
    pub submitting: bool,
}

impl RuntimePage {
    pub fn new(form_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            status: RuntimeStatus::Loading,
            title: String::new(),
            fields: Vec::new(),
            inputs: Vec::new(),
            responses: Vec::new(),
            focus_index: 0,
            scroll: 0,
            submitting: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == RuntimeStatus::Ready
    }

    /// Install a fetched form; a missing form or field collection fails the page
    pub fn apply_loaded(&mut self, form: Option<FormRecord>) {
        let Some(form) = form else {
            self.fail();
            return;
        };
        let Some(fields) = form.fields else {
            self.fail();
            return;
        };
        self.inputs = fields
            .iter()
            .map(|f| match f.field_type {
                FieldType::Password => TextInput::masked(),
                _ => TextInput::new(),
            })
            .collect();
        self.title = form.title;
        self.fields = fields;
        self.responses = form.responses;
        self.focus_index = 0;
        self.scroll = 0;
        self.status = RuntimeStatus::Ready;
    }

    fn fail(&mut self) {
        self.status = RuntimeStatus::Failed(LOAD_FAILED_MESSAGE.to_string());
    }

    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn on_submit_button(&self) -> bool {
        self.has_fields() && self.focus_index == self.fields.len()
    }

    /// Number of focusable stops: every input plus the submit button
    fn focus_stops(&self) -> usize {
        if self.has_fields() {
            self.fields.len() + 1
        } else {
            0
        }
    }

    pub fn next_focus(&mut self) {
        let stops = self.focus_stops();
        if stops > 0 {
            self.focus_index = (self.focus_index + 1) % stops;
        }
    }

    pub fn prev_focus(&mut self) {
        let stops = self.focus_stops();
        if stops > 0 {
            self.focus_index = (self.focus_index + stops - 1) % stops;
        }
    }

    pub fn focus(&mut self, index: usize) {
        if index < self.focus_stops() {
            self.focus_index = index;
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        self.inputs.get_mut(self.focus_index)
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(input) = self.focused_input() {
            input.push_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(input) = self.focused_input() {
            input.pop_char();
        }
    }

    /// Lines of the responses panel: a header, one line per entry and a
    /// blank separator per response, or a single placeholder line
    pub fn response_line_count(&self) -> usize {
        if self.responses.is_empty() {
            return 1;
        }
        self.responses.iter().map(|r| r.data.len() + 2).sum()
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.response_line_count() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Values as typed, in field order
    pub fn values(&self) -> Vec<String> {
        self.inputs.iter().map(|i| i.as_str().to_string()).collect()
    }

    /// Validate the typed values and build the submission body keyed by position
    pub fn prepare_submission(&self) -> Result<SubmissionPayload, ValidationError> {
        let values = self.values();
        validate_responses(&self.fields, &values)?;
        let responses: BTreeMap<String, String> = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect();
        Ok(SubmissionPayload { responses })
    }
}
