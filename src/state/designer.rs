//! Form designer page state (create and edit variants)

use super::field_list::{DragState, EditorError, FieldAttribute, FieldListEditor};
use super::form::{FieldType, FormPayload, FormRecord};
use super::input::TextInput;

/// Title a new form starts with
pub const DEFAULT_FORM_TITLE: &str = "Untitled Form";

/// Whether the designer creates a new form or edits a stored one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesignerMode {
    Create,
    Edit { form_id: String },
}

/// Load status of the designer page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignerLoad {
    Loading,
    Ready,
    NotFound,
}

/// Which part of the designer receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DesignerFocus {
    FormTitle,
    #[default]
    Fields,
    FieldTitle,
    FieldPlaceholder,
    AddMenu,
}

impl DesignerFocus {
    /// Editable attribute bound to this focus, if any
    pub fn attribute(&self) -> Option<FieldAttribute> {
        match self {
            Self::FieldTitle => Some(FieldAttribute::Title),
            Self::FieldPlaceholder => Some(FieldAttribute::Placeholder),
            _ => None,
        }
    }
}

/// Designer page state
#[derive(Debug, Clone)]
pub struct DesignerPage {
    pub mode: DesignerMode,
    pub load: DesignerLoad,
    pub title: TextInput,
    pub editor: FieldListEditor,
    pub focus: DesignerFocus,
    pub show_add_menu: bool,
    pub add_menu_index: usize,
    pub drag: Option<DragState>,
    /// A create or update request is in flight
    pub saving: bool,
    /// Set once a save succeeded; further saves are ignored until navigation
    pub saved: bool,
}

impl DesignerPage {
    /// Designer for a brand-new form
    pub fn new_create() -> Self {
        Self {
            mode: DesignerMode::Create,
            load: DesignerLoad::Ready,
            title: TextInput::with_value(DEFAULT_FORM_TITLE),
            editor: FieldListEditor::new(),
            focus: DesignerFocus::default(),
            show_add_menu: false,
            add_menu_index: 0,
            drag: None,
            saving: false,
            saved: false,
        }
    }

    /// Designer for a stored form; fields arrive with `apply_loaded`
    pub fn new_edit(form_id: impl Into<String>) -> Self {
        Self {
            mode: DesignerMode::Edit {
                form_id: form_id.into(),
            },
            load: DesignerLoad::Loading,
            title: TextInput::new(),
            ..Self::new_create()
        }
    }

    pub fn form_id(&self) -> Option<&str> {
        match &self.mode {
            DesignerMode::Create => None,
            DesignerMode::Edit { form_id } => Some(form_id),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.load == DesignerLoad::Ready
    }

    /// Install a fetched form, or switch to the not-found state when there is none
    pub fn apply_loaded(&mut self, form: Option<FormRecord>) {
        match form {
            Some(form) => {
                self.title.set(form.title);
                self.editor = FieldListEditor::from_stored(form.fields.unwrap_or_default());
                self.load = DesignerLoad::Ready;
            }
            None => self.load = DesignerLoad::NotFound,
        }
    }

    // Add field menu

    pub fn toggle_add_menu(&mut self) {
        self.show_add_menu = !self.show_add_menu;
        self.focus = if self.show_add_menu {
            DesignerFocus::AddMenu
        } else {
            DesignerFocus::Fields
        };
    }

    pub fn next_menu_item(&mut self) {
        self.add_menu_index = (self.add_menu_index + 1) % FieldType::ALL.len();
    }

    pub fn prev_menu_item(&mut self) {
        if self.add_menu_index == 0 {
            self.add_menu_index = FieldType::ALL.len() - 1;
        } else {
            self.add_menu_index -= 1;
        }
    }

    pub fn menu_field_type(&self) -> FieldType {
        FieldType::ALL[self.add_menu_index % FieldType::ALL.len()]
    }

    /// Add a field and close the menu; on capacity the menu stays as it was
    pub fn add_field(&mut self, field_type: FieldType) -> Result<(), EditorError> {
        self.editor.add_field(field_type)?;
        self.show_add_menu = false;
        self.focus = DesignerFocus::FieldTitle;
        Ok(())
    }

    // Focus

    /// Cycle focus: form title, fields, then the property inputs when a field is selected
    pub fn next_focus(&mut self) {
        let has_selection = self.editor.selected_key().is_some();
        self.focus = match self.focus {
            DesignerFocus::FormTitle => DesignerFocus::Fields,
            DesignerFocus::Fields if has_selection => DesignerFocus::FieldTitle,
            DesignerFocus::FieldTitle => DesignerFocus::FieldPlaceholder,
            _ => DesignerFocus::FormTitle,
        };
        self.show_add_menu = false;
    }

    pub fn prev_focus(&mut self) {
        let has_selection = self.editor.selected_key().is_some();
        self.focus = match self.focus {
            DesignerFocus::FormTitle if has_selection => DesignerFocus::FieldPlaceholder,
            DesignerFocus::FieldPlaceholder => DesignerFocus::FieldTitle,
            DesignerFocus::FieldTitle => DesignerFocus::Fields,
            DesignerFocus::Fields => DesignerFocus::FormTitle,
            _ => DesignerFocus::Fields,
        };
        self.show_add_menu = false;
    }

    /// Clear the selected field; property focus falls back to the list
    pub fn clear_selection(&mut self) {
        self.editor.clear_selection();
        if self.focus.attribute().is_some() {
            self.focus = DesignerFocus::Fields;
        }
    }

    // Text entry

    pub fn input_char(&mut self, c: char) {
        match self.focus {
            DesignerFocus::FormTitle => self.title.push_char(c),
            focus => {
                if let Some(attribute) = focus.attribute() {
                    self.edit_selected(attribute, |value| value.push(c));
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            DesignerFocus::FormTitle => self.title.pop_char(),
            focus => {
                if let Some(attribute) = focus.attribute() {
                    self.edit_selected(attribute, |value| {
                        value.pop();
                    });
                }
            }
        }
    }

    fn edit_selected(&mut self, attribute: FieldAttribute, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.editor.selected_field() else {
            return;
        };
        let key = field.key.clone();
        let mut value = match attribute {
            FieldAttribute::Title => field.title.clone(),
            FieldAttribute::Placeholder => field.placeholder.clone(),
        };
        edit(&mut value);
        self.editor.update_field(&key, attribute, value);
    }

    /// Remove the selected field
    pub fn remove_selected(&mut self) {
        if let Some(key) = self.editor.selected_key().cloned() {
            self.editor.remove_field(&key);
            if self.focus.attribute().is_some() {
                self.focus = DesignerFocus::Fields;
            }
        }
    }

    // Drag and drop

    /// Pick up the selected field
    pub fn begin_drag(&mut self) {
        if let Some(key) = self.editor.selected_key().cloned() {
            self.drag = Some(DragState::new(key));
        }
    }

    pub fn move_drag(&mut self, delta: isize) {
        if let Some(drag) = self.drag.as_mut() {
            drag.step(&self.editor, delta);
        }
    }

    /// Point the drag at the field shown at `index`, or nowhere
    pub fn hover_drag(&mut self, index: Option<usize>) {
        if let Some(drag) = self.drag.as_mut() {
            drag.target = index.and_then(|i| self.editor.key_at(i)).cloned();
        }
    }

    pub fn drop_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            drag.drop_onto(&mut self.editor);
        }
    }

    /// Abandon the drag without a drop target
    pub fn cancel_drag(&mut self) {
        if let Some(mut drag) = self.drag.take() {
            drag.target = None;
            drag.drop_onto(&mut self.editor);
        }
    }

    /// Index of the row that should be kept visible in the field list
    pub fn focus_row(&self) -> Option<usize> {
        self.drag
            .as_ref()
            .and_then(|d| d.target.as_ref())
            .and_then(|k| self.editor.index_of(k))
            .or_else(|| self.editor.selected_index())
    }

    // Submission

    /// Build the create/update body, or the warning that blocks it
    pub fn prepare_submission(&self) -> Result<FormPayload, &'static str> {
        if self.title.as_str().trim().is_empty() {
            return Err("Form title is required!");
        }
        Ok(FormPayload {
            id: self.form_id().map(str::to_string),
            title: self.title.as_str().to_string(),
            fields: self
                .editor
                .finalize()
                .iter()
                .map(|f| f.to_record())
                .collect(),
        })
    }
}
