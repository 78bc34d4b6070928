//! Client-side validation of form responses

use super::form::{FieldRecord, FieldType};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").ok());

/// First rule a response violated, naming the field by its title
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the \"{title}\" field.")]
    Required { title: String },
    #[error("\"{title}\" must be a valid email.")]
    InvalidEmail { title: String },
    #[error("\"{title}\" must be a valid number.")]
    InvalidNumber { title: String },
}

/// Check `values` against `fields` in field order, stopping at the first violation.
///
/// `values[i]` is the response typed for `fields[i]`; a missing value counts as empty.
pub fn validate_responses(fields: &[FieldRecord], values: &[String]) -> Result<(), ValidationError> {
    for (index, field) in fields.iter().enumerate() {
        let value = values.get(index).map(String::as_str).unwrap_or("");
        let title = || field.title.clone();

        if value.trim().is_empty() {
            return Err(ValidationError::Required { title: title() });
        }
        match field.field_type {
            FieldType::Email if !is_email_shaped(value) => {
                return Err(ValidationError::InvalidEmail { title: title() });
            }
            FieldType::Number if !coerces_to_number(value) => {
                return Err(ValidationError::InvalidNumber { title: title() });
            }
            _ => {}
        }
    }
    Ok(())
}

/// Something, an `@`, something, a `.`, something; no whitespace in each part
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Loose numeric check matching browser string-to-number coercion.
///
/// Surrounding whitespace is ignored and an empty string coerces to zero.
/// Accepts decimal literals with optional sign and exponent, `Infinity`
/// with optional sign, and unsigned `0x`/`0o`/`0b` integer literals.
pub fn coerces_to_number(value: &str) -> bool {
    let s = value.trim();
    if s.is_empty() {
        return true;
    }
    if matches!(s, "Infinity" | "+Infinity" | "-Infinity") {
        return true;
    }
    if let Some((radix, digits)) = radix_literal(s) {
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }
    // Rust also parses "inf" and "nan"; keep letters other than the exponent out
    if s.chars().any(|c| c.is_alphabetic() && c != 'e' && c != 'E') {
        return false;
    }
    s.parse::<f64>().is_ok()
}

fn radix_literal(s: &str) -> Option<(u32, &str)> {
    let prefix = s.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}
