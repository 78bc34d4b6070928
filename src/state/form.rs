//! Form domain model shared by the designer, runtime and listing views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Maximum number of fields a single form may hold
pub const MAX_FIELDS: usize = 20;

/// Input type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Email,
    Password,
    Date,
}

impl FieldType {
    /// Every field type, in the order the "Add Field" menu offers them
    pub const ALL: [FieldType; 5] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Email,
        FieldType::Password,
        FieldType::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Email => "email",
            Self::Password => "password",
            Self::Date => "date",
        }
    }

    /// Capitalized type name, used when a field title is left blank
    pub fn default_title(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Hint text used when a field placeholder is left blank
    pub fn default_placeholder(&self) -> String {
        format!("Enter {}", self.as_str())
    }

    /// Single-key shortcut shown in the "Add Field" menu
    pub fn shortcut(&self) -> char {
        match self {
            Self::Text => 't',
            Self::Number => 'n',
            Self::Email => 'e',
            Self::Password => 'p',
            Self::Date => 'd',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.shortcut() == c.to_ascii_lowercase())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of a field inside the designer.
///
/// Unsaved fields carry a client-generated token; fields loaded from the
/// service carry the identifier the service assigned. The two spaces never mix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Draft(u64),
    Stored(String),
}

impl FieldKey {
    /// Server identifier, if the field has been persisted
    pub fn stored_id(&self) -> Option<&str> {
        match self {
            Self::Draft(_) => None,
            Self::Stored(id) => Some(id),
        }
    }
}

/// A field as edited in the designer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftField {
    pub key: FieldKey,
    pub field_type: FieldType,
    pub title: String,
    pub placeholder: String,
}

impl DraftField {
    /// New unsaved field with type-derived title and placeholder
    pub fn new(token: u64, field_type: FieldType) -> Self {
        Self {
            key: FieldKey::Draft(token),
            field_type,
            title: field_type.default_title(),
            placeholder: field_type.default_placeholder(),
        }
    }

    /// Map a persisted field into the designer's identifier space
    pub fn from_record(record: FieldRecord, fallback_token: u64) -> Self {
        let key = match record.id {
            Some(id) => FieldKey::Stored(id),
            None => FieldKey::Draft(fallback_token),
        };
        Self {
            key,
            field_type: record.field_type,
            title: record.title,
            placeholder: record.placeholder,
        }
    }

    /// Copy with blank title/placeholder replaced by the type defaults
    pub fn normalized(&self) -> Self {
        let title = match self.title.trim() {
            "" => self.field_type.default_title(),
            t => t.to_string(),
        };
        let placeholder = match self.placeholder.trim() {
            "" => self.field_type.default_placeholder(),
            p => p.to_string(),
        };
        Self {
            key: self.key.clone(),
            field_type: self.field_type,
            title,
            placeholder,
        }
    }

    /// Wire representation; draft tokens are not sent to the service
    pub fn to_record(&self) -> FieldRecord {
        FieldRecord {
            id: self.key.stored_id().map(str::to_string),
            field_type: self.field_type,
            title: self.title.clone(),
            placeholder: self.placeholder.clone(),
        }
    }
}

/// Field as exchanged with the forms service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub placeholder: String,
}

/// One submission of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
}

impl ResponseRecord {
    /// Data entries with positional keys in numeric order, other keys after
    pub fn ordered_entries(&self) -> Vec<(&str, String)> {
        let mut entries: Vec<(&str, String)> = self
            .data
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                (k.as_str(), value)
            })
            .collect();
        entries.sort_by(|(a, _), (b, _)| {
            match (a.parse::<usize>(), b.parse::<usize>()) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                (Ok(_), Err(_)) => std::cmp::Ordering::Less,
                (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
                (Err(_), Err(_)) => a.cmp(b),
            }
        });
        entries
    }
}

/// Full form document returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    /// `None` when the payload carries no field collection at all
    #[serde(rename = "inputs", alias = "fields", default)]
    pub fields: Option<Vec<FieldRecord>>,
    #[serde(default)]
    pub responses: Vec<ResponseRecord>,
}

/// Entry of the forms listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// Body of create/update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormPayload {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "inputs")]
    pub fields: Vec<FieldRecord>,
}

/// Body of a response submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub responses: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod field_type {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_title_is_capitalized() {
            assert_eq!(FieldType::Email.default_title(), "Email");
            assert_eq!(FieldType::Password.default_title(), "Password");
        }

        #[test]
        fn test_default_placeholder() {
            assert_eq!(FieldType::Date.default_placeholder(), "Enter date");
        }

        #[test]
        fn test_shortcut_round_trip() {
            for t in FieldType::ALL {
                assert_eq!(FieldType::from_shortcut(t.shortcut()), Some(t));
            }
            assert_eq!(FieldType::from_shortcut('N'), Some(FieldType::Number));
            assert_eq!(FieldType::from_shortcut('x'), None);
        }

        #[test]
        fn test_serializes_lowercase() {
            let json = serde_json::to_string(&FieldType::Number).unwrap();
            assert_eq!(json, "\"number\"");
        }
    }

    mod draft_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_uses_type_defaults() {
            let field = DraftField::new(7, FieldType::Text);
            assert_eq!(field.key, FieldKey::Draft(7));
            assert_eq!(field.title, "Text");
            assert_eq!(field.placeholder, "Enter text");
        }

        #[test]
        fn test_normalized_fills_blank_values() {
            let mut field = DraftField::new(1, FieldType::Email);
            field.title = "   ".to_string();
            field.placeholder = String::new();
            let normalized = field.normalized();
            assert_eq!(normalized.title, "Email");
            assert_eq!(normalized.placeholder, "Enter email");
        }

        #[test]
        fn test_normalized_trims_present_values() {
            let mut field = DraftField::new(1, FieldType::Text);
            field.title = "  Name ".to_string();
            assert_eq!(field.normalized().title, "Name");
        }

        #[test]
        fn test_to_record_omits_draft_token() {
            let field = DraftField::new(99, FieldType::Number);
            let json = serde_json::to_value(field.to_record()).unwrap();
            assert!(json.get("_id").is_none());
            assert_eq!(json["type"], "number");
        }

        #[test]
        fn test_from_record_maps_stored_id() {
            let record = FieldRecord {
                id: Some("abc".to_string()),
                field_type: FieldType::Date,
                title: "Birthday".to_string(),
                placeholder: "Enter date".to_string(),
            };
            let field = DraftField::from_record(record, 5);
            assert_eq!(field.key, FieldKey::Stored("abc".to_string()));
            assert_eq!(field.to_record().id.as_deref(), Some("abc"));
        }
    }

    mod wire_format {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_form_record_reads_service_shape() {
            let json = r#"{
                "_id": "f1",
                "title": "Signup",
                "inputs": [
                    {"_id": "i1", "type": "email", "title": "Email", "placeholder": "Enter email"}
                ],
                "responses": [
                    {"submittedAt": "2025-03-01T10:05:00.000Z", "data": {"0": "a@b.co"}}
                ]
            }"#;
            let form: FormRecord = serde_json::from_str(json).unwrap();
            assert_eq!(form.id.as_deref(), Some("f1"));
            let fields = form.fields.unwrap();
            assert_eq!(fields[0].id.as_deref(), Some("i1"));
            assert_eq!(fields[0].field_type, FieldType::Email);
            assert_eq!(form.responses.len(), 1);
        }

        #[test]
        fn test_form_record_accepts_aliases() {
            let json = r#"{"id": "f2", "title": "T", "fields": []}"#;
            let form: FormRecord = serde_json::from_str(json).unwrap();
            assert_eq!(form.id.as_deref(), Some("f2"));
            assert_eq!(form.fields, Some(Vec::new()));
        }

        #[test]
        fn test_missing_field_collection_is_none() {
            let form: FormRecord = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
            assert!(form.fields.is_none());
            assert!(form.responses.is_empty());
        }

        #[test]
        fn test_payload_uses_inputs_key() {
            let payload = FormPayload {
                id: None,
                title: "T".to_string(),
                fields: vec![DraftField::new(1, FieldType::Text).to_record()],
            };
            let json = serde_json::to_value(&payload).unwrap();
            assert!(json.get("_id").is_none());
            assert_eq!(json["inputs"][0]["title"], "Text");
        }
    }

    mod response_record {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ordered_entries_sorts_positions_numerically() {
            let mut data = BTreeMap::new();
            for i in [10, 2, 0, 1] {
                data.insert(i.to_string(), serde_json::Value::String(format!("v{i}")));
            }
            data.insert("note".to_string(), serde_json::json!(5));
            let response = ResponseRecord {
                submitted_at: Utc::now(),
                data,
            };
            let keys: Vec<&str> = response.ordered_entries().iter().map(|(k, _)| *k).collect();
            assert_eq!(keys, vec!["0", "1", "2", "10", "note"]);
            assert_eq!(response.ordered_entries()[4].1, "5");
        }
    }
}
