//! Ordered field collection edited by the form designer

use super::form::{DraftField, FieldKey, FieldRecord, FieldType, MAX_FIELDS};
use thiserror::Error;

/// Errors raised by field list operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Maximum {MAX_FIELDS} fields allowed")]
    CapacityReached,
}

/// Editable attribute of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAttribute {
    Title,
    Placeholder,
}

/// Field collection plus the current selection.
///
/// The selection is a key into `fields`; the selected field is always read
/// back from the collection.
#[derive(Debug, Clone, Default)]
pub struct FieldListEditor {
    fields: Vec<DraftField>,
    selected: Option<FieldKey>,
    next_token: u64,
}

impl FieldListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an editor from persisted fields, mapping server ids into `FieldKey::Stored`
    pub fn from_stored(records: Vec<FieldRecord>) -> Self {
        let mut editor = Self::new();
        for record in records {
            let token = editor.fresh_token();
            editor.fields.push(DraftField::from_record(record, token));
        }
        editor
    }

    fn fresh_token(&mut self) -> u64 {
        self.next_token += 1;
        self.next_token
    }

    pub fn fields(&self) -> &[DraftField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn index_of(&self, key: &FieldKey) -> Option<usize> {
        self.fields.iter().position(|f| &f.key == key)
    }

    /// Append a field of `field_type` and select it
    pub fn add_field(&mut self, field_type: FieldType) -> Result<FieldKey, EditorError> {
        if self.fields.len() >= MAX_FIELDS {
            return Err(EditorError::CapacityReached);
        }
        let token = self.fresh_token();
        let field = DraftField::new(token, field_type);
        let key = field.key.clone();
        self.fields.push(field);
        self.selected = Some(key.clone());
        Ok(key)
    }

    /// Replace `attribute` on the field matching `key`; no-op without a selection
    pub fn update_field(&mut self, key: &FieldKey, attribute: FieldAttribute, value: String) {
        if self.selected.is_none() {
            return;
        }
        if let Some(field) = self.fields.iter_mut().find(|f| &f.key == key) {
            match attribute {
                FieldAttribute::Title => field.title = value,
                FieldAttribute::Placeholder => field.placeholder = value,
            }
        }
    }

    /// Remove the field matching `key`, clearing the selection if it pointed there
    pub fn remove_field(&mut self, key: &FieldKey) {
        self.fields.retain(|f| &f.key != key);
        if self.selected.as_ref() == Some(key) {
            self.selected = None;
        }
    }

    /// Move `source` to the position currently held by `target`.
    ///
    /// Elements between the two positions shift by one. Nothing happens when
    /// there is no target, the target is the source, or either key is unknown.
    pub fn reorder(&mut self, source: &FieldKey, target: Option<&FieldKey>) {
        let Some(target) = target else {
            return;
        };
        if source == target {
            return;
        }
        let (Some(from), Some(to)) = (self.index_of(source), self.index_of(target)) else {
            return;
        };
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
    }

    /// Normalized copy of the collection, ready for submission
    pub fn finalize(&self) -> Vec<DraftField> {
        finalize_fields(&self.fields)
    }

    // Selection

    pub fn select(&mut self, key: &FieldKey) {
        if self.index_of(key).is_some() {
            self.selected = Some(key.clone());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_key(&self) -> Option<&FieldKey> {
        self.selected.as_ref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected.as_ref().and_then(|k| self.index_of(k))
    }

    pub fn selected_field(&self) -> Option<&DraftField> {
        self.selected_index().map(|i| &self.fields[i])
    }

    pub fn is_selected(&self, key: &FieldKey) -> bool {
        self.selected.as_ref() == Some(key)
    }

    /// Select the field after the current one (first field when nothing is selected)
    pub fn select_next(&mut self) {
        let next = match self.selected_index() {
            Some(i) if i + 1 < self.fields.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        if let Some(field) = self.fields.get(next) {
            self.selected = Some(field.key.clone());
        }
    }

    /// Select the field before the current one (last field when nothing is selected)
    pub fn select_prev(&mut self) {
        let prev = match self.selected_index() {
            Some(i) => i.saturating_sub(1),
            None => self.fields.len().saturating_sub(1),
        };
        if let Some(field) = self.fields.get(prev) {
            self.selected = Some(field.key.clone());
        }
    }

    pub fn key_at(&self, index: usize) -> Option<&FieldKey> {
        self.fields.get(index).map(|f| &f.key)
    }
}

/// Replace blank titles and placeholders with their type defaults
pub fn finalize_fields(fields: &[DraftField]) -> Vec<DraftField> {
    fields.iter().map(DraftField::normalized).collect()
}

/// In-progress drag of a field over the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    pub source: FieldKey,
    /// Field currently hovered; `None` when outside any field
    pub target: Option<FieldKey>,
}

impl DragState {
    pub fn new(source: FieldKey) -> Self {
        Self {
            target: Some(source.clone()),
            source,
        }
    }

    /// Move the hovered target by `delta` rows within `editor`
    pub fn step(&mut self, editor: &FieldListEditor, delta: isize) {
        if editor.is_empty() {
            self.target = None;
            return;
        }
        let current = self
            .target
            .as_ref()
            .and_then(|k| editor.index_of(k))
            .or_else(|| editor.index_of(&self.source))
            .unwrap_or(0) as isize;
        let last = editor.len() as isize - 1;
        let next = (current + delta).clamp(0, last) as usize;
        self.target = editor.key_at(next).cloned();
    }

    /// Apply the drop to `editor`
    pub fn drop_onto(self, editor: &mut FieldListEditor) {
        editor.reorder(&self.source, self.target.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn editor_with(types: &[FieldType]) -> FieldListEditor {
        let mut editor = FieldListEditor::new();
        for t in types {
            editor.add_field(*t).unwrap();
        }
        editor
    }

    fn keys(editor: &FieldListEditor) -> Vec<FieldKey> {
        editor.fields().iter().map(|f| f.key.clone()).collect()
    }

    mod add_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_appends_and_selects() {
            let mut editor = FieldListEditor::new();
            let key = editor.add_field(FieldType::Email).unwrap();
            assert_eq!(editor.len(), 1);
            assert_eq!(editor.selected_key(), Some(&key));
            let field = editor.selected_field().unwrap();
            assert_eq!(field.title, "Email");
            assert_eq!(field.placeholder, "Enter email");
        }

        #[test]
        fn test_keys_are_unique() {
            let editor = editor_with(&[FieldType::Text; 5]);
            let mut all = keys(&editor);
            all.dedup();
            assert_eq!(all.len(), 5);
        }

        #[test]
        fn test_twenty_first_field_is_rejected() {
            let mut editor = FieldListEditor::new();
            for i in 0..MAX_FIELDS {
                let t = FieldType::ALL[i % FieldType::ALL.len()];
                assert!(editor.add_field(t).is_ok());
            }
            let before = keys(&editor);
            let selected_before = editor.selected_key().cloned();

            assert_eq!(
                editor.add_field(FieldType::Text),
                Err(EditorError::CapacityReached)
            );
            assert_eq!(editor.len(), MAX_FIELDS);
            assert_eq!(keys(&editor), before);
            assert_eq!(editor.selected_key().cloned(), selected_before);
        }

        #[test]
        fn test_length_never_exceeds_limit() {
            let mut editor = FieldListEditor::new();
            for i in 0..50 {
                let _ = editor.add_field(FieldType::ALL[i % 5]);
                assert!(editor.len() <= MAX_FIELDS);
            }
        }

        #[test]
        fn test_capacity_message() {
            assert_eq!(
                EditorError::CapacityReached.to_string(),
                "Maximum 20 fields allowed"
            );
        }
    }

    mod update_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_update_without_selection_is_noop() {
            let mut editor = editor_with(&[FieldType::Text]);
            let key = editor.key_at(0).cloned().unwrap();
            editor.clear_selection();
            editor.update_field(&key, FieldAttribute::Title, "Name".to_string());
            assert_eq!(editor.fields()[0].title, "Text");
        }

        #[test]
        fn test_update_is_visible_through_selection() {
            let mut editor = editor_with(&[FieldType::Text]);
            let key = editor.key_at(0).cloned().unwrap();
            editor.update_field(&key, FieldAttribute::Placeholder, "Your name".to_string());
            assert_eq!(editor.selected_field().unwrap().placeholder, "Your name");
            assert_eq!(editor.fields()[0].placeholder, "Your name");
        }

        #[test]
        fn test_update_targets_matching_key_only() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Number]);
            let first = editor.key_at(0).cloned().unwrap();
            editor.update_field(&first, FieldAttribute::Title, "First".to_string());
            assert_eq!(editor.fields()[0].title, "First");
            assert_eq!(editor.fields()[1].title, "Number");
        }
    }

    mod remove_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_remove_selected_clears_selection() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Date]);
            let selected = editor.selected_key().cloned().unwrap();
            editor.remove_field(&selected);
            assert_eq!(editor.len(), 1);
            assert!(editor.selected_key().is_none());
        }

        #[test]
        fn test_remove_other_keeps_selection() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Date]);
            let first = editor.key_at(0).cloned().unwrap();
            let selected = editor.selected_key().cloned();
            editor.remove_field(&first);
            assert_eq!(editor.selected_key().cloned(), selected);
            assert_eq!(editor.selected_index(), Some(0));
        }
    }

    mod reorder {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_moves_forward_shifting_intervening() {
            let mut editor = editor_with(&[
                FieldType::Text,
                FieldType::Number,
                FieldType::Email,
                FieldType::Date,
            ]);
            let original = keys(&editor);
            editor.reorder(&original[0], Some(&original[2]));
            assert_eq!(
                keys(&editor),
                vec![
                    original[1].clone(),
                    original[2].clone(),
                    original[0].clone(),
                    original[3].clone()
                ]
            );
        }

        #[test]
        fn test_moves_backward() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Number, FieldType::Email]);
            let original = keys(&editor);
            editor.reorder(&original[2], Some(&original[0]));
            assert_eq!(
                keys(&editor),
                vec![original[2].clone(), original[0].clone(), original[1].clone()]
            );
        }

        fn five_fields() -> FieldListEditor {
            editor_with(&[
                FieldType::Text,
                FieldType::Number,
                FieldType::Email,
                FieldType::Password,
                FieldType::Date,
            ])
        }

        #[test]
        fn test_adjacent_reorder_then_reverse_restores_order() {
            let mut editor = five_fields();
            let original = keys(&editor);
            for (a, b) in [(0, 1), (1, 2), (3, 2), (4, 3)] {
                let (ka, kb) = (original[a].clone(), original[b].clone());
                editor.reorder(&ka, Some(&kb));
                editor.reorder(&kb, Some(&ka));
                assert_eq!(keys(&editor), original);
            }
        }

        #[test]
        fn test_distant_reorder_then_reverse_is_two_moves() {
            let mut editor = five_fields();
            let original = keys(&editor);
            editor.reorder(&original[0], Some(&original[4]));
            editor.reorder(&original[4], Some(&original[0]));
            // Each call is a move, not a swap: the first field ends up one
            // slot before the last instead of back at the front
            assert_eq!(
                keys(&editor),
                vec![
                    original[1].clone(),
                    original[2].clone(),
                    original[3].clone(),
                    original[0].clone(),
                    original[4].clone()
                ]
            );
        }

        #[test]
        fn test_missing_target_is_noop() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Number]);
            let original = keys(&editor);
            editor.reorder(&original[0], None);
            assert_eq!(keys(&editor), original);
        }

        #[test]
        fn test_same_target_is_noop() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Number]);
            let original = keys(&editor);
            editor.reorder(&original[1], Some(&original[1]));
            assert_eq!(keys(&editor), original);
        }

        #[test]
        fn test_unknown_key_is_noop() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Number]);
            let original = keys(&editor);
            editor.reorder(&FieldKey::Draft(999), Some(&original[0]));
            editor.reorder(&original[0], Some(&FieldKey::Stored("gone".to_string())));
            assert_eq!(keys(&editor), original);
        }
    }

    mod finalize {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blank_values_get_defaults() {
            let mut editor = editor_with(&[FieldType::Email]);
            let key = editor.key_at(0).cloned().unwrap();
            editor.update_field(&key, FieldAttribute::Title, "  ".to_string());
            editor.update_field(&key, FieldAttribute::Placeholder, String::new());
            let fields = editor.finalize();
            assert_eq!(fields[0].title, "Email");
            assert_eq!(fields[0].placeholder, "Enter email");
        }

        #[test]
        fn test_finalize_is_idempotent() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Number, FieldType::Date]);
            let first = editor.key_at(0).cloned().unwrap();
            let last = editor.key_at(2).cloned().unwrap();
            editor.select(&first);
            editor.update_field(&first, FieldAttribute::Title, " Full name ".to_string());
            editor.update_field(&last, FieldAttribute::Placeholder, "\t".to_string());

            let once = editor.finalize();
            let twice = finalize_fields(&once);
            assert_eq!(once, twice);
        }

        #[test]
        fn test_finalize_preserves_order_and_keys() {
            let editor = editor_with(&[FieldType::Password, FieldType::Text]);
            let finalized: Vec<FieldKey> = editor.finalize().into_iter().map(|f| f.key).collect();
            assert_eq!(finalized, keys(&editor));
        }
    }

    mod stored_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_from_stored_maps_ids() {
            let editor = FieldListEditor::from_stored(vec![
                FieldRecord {
                    id: Some("a".to_string()),
                    field_type: FieldType::Text,
                    title: "Name".to_string(),
                    placeholder: "Enter text".to_string(),
                },
                FieldRecord {
                    id: None,
                    field_type: FieldType::Number,
                    title: "Age".to_string(),
                    placeholder: "Enter number".to_string(),
                },
            ]);
            assert_eq!(editor.fields()[0].key, FieldKey::Stored("a".to_string()));
            assert!(matches!(editor.fields()[1].key, FieldKey::Draft(_)));
            assert!(editor.selected_key().is_none());
        }

        #[test]
        fn test_added_field_does_not_collide_with_mapped_fields() {
            let mut editor = FieldListEditor::from_stored(vec![FieldRecord {
                id: None,
                field_type: FieldType::Text,
                title: "A".to_string(),
                placeholder: String::new(),
            }]);
            let added = editor.add_field(FieldType::Text).unwrap();
            assert_ne!(editor.fields()[0].key, added);
        }
    }

    mod selection {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_select_next_and_prev() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Number, FieldType::Email]);
            editor.clear_selection();
            editor.select_next();
            assert_eq!(editor.selected_index(), Some(0));
            editor.select_next();
            editor.select_next();
            editor.select_next();
            assert_eq!(editor.selected_index(), Some(2));
            editor.select_prev();
            assert_eq!(editor.selected_index(), Some(1));
        }

        #[test]
        fn test_select_prev_without_selection_picks_last() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Number]);
            editor.clear_selection();
            editor.select_prev();
            assert_eq!(editor.selected_index(), Some(1));
        }

        #[test]
        fn test_select_unknown_key_is_ignored() {
            let mut editor = editor_with(&[FieldType::Text]);
            editor.clear_selection();
            editor.select(&FieldKey::Draft(42));
            assert!(editor.selected_key().is_none());
        }
    }

    mod drag {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_drag_down_and_drop() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Number, FieldType::Email]);
            let original = keys(&editor);
            let mut drag = DragState::new(original[0].clone());
            drag.step(&editor, 1);
            drag.step(&editor, 1);
            assert_eq!(drag.target.as_ref(), Some(&original[2]));
            drag.drop_onto(&mut editor);
            assert_eq!(
                keys(&editor),
                vec![original[1].clone(), original[2].clone(), original[0].clone()]
            );
        }

        #[test]
        fn test_step_clamps_to_bounds() {
            let editor = editor_with(&[FieldType::Text, FieldType::Number]);
            let mut drag = DragState::new(editor.key_at(0).cloned().unwrap());
            drag.step(&editor, -3);
            assert_eq!(drag.target.as_ref(), editor.key_at(0));
            drag.step(&editor, 10);
            assert_eq!(drag.target.as_ref(), editor.key_at(1));
        }

        #[test]
        fn test_drop_outside_is_noop() {
            let mut editor = editor_with(&[FieldType::Text, FieldType::Number]);
            let original = keys(&editor);
            let mut drag = DragState::new(original[1].clone());
            drag.target = None;
            drag.drop_onto(&mut editor);
            assert_eq!(keys(&editor), original);
        }
    }
}
