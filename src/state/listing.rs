//! Listing page state

use super::form::FormSummary;

/// Forms shown on the listing page
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    pub forms: Vec<FormSummary>,
    pub selected_index: usize,
    /// False until the first fetch has resolved
    pub loaded: bool,
}

impl ListingPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with a fresh fetch result
    pub fn set_forms(&mut self, forms: Vec<FormSummary>) {
        self.forms = forms;
        self.loaded = true;
        self.clamp_selection();
    }

    pub fn selected_form(&self) -> Option<&FormSummary> {
        self.forms.get(self.selected_index)
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if !self.forms.is_empty() && self.selected_index < self.forms.len() - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.forms.len() {
            self.selected_index = index;
        }
    }

    /// Drop the entry with `id` after a confirmed deletion
    pub fn remove_form(&mut self, id: &str) {
        self.forms.retain(|f| f.id != id);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let max = self.forms.len();
        if self.selected_index >= max && max > 0 {
            self.selected_index = max - 1;
        } else if max == 0 {
            self.selected_index = 0;
        }
    }
}
