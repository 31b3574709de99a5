//! Schema evaluator -- pure logic, no I/O.

use regex::Regex;
use serde_json::Value;
use validator::ValidateEmail;

use super::rules::{Check, FieldError, FieldSchema, FormSchema, ValidationReport};

/// Validate a data record against a schema.
///
/// Deterministic: identical inputs always yield identical reports.
pub fn validate(schema: &FormSchema, data: &serde_json::Map<String, Value>) -> ValidationReport {
    let mut errors = Vec::new();

    for field in &schema.fields {
        if let Some(error) = validate_field(field, data.get(field.field)) {
            errors.push(error);
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Serialize a draft to a JSON object and validate it.
///
/// Drafts that do not serialize to an object validate as empty records.
pub fn validate_draft<T: serde::Serialize>(schema: &FormSchema, draft: &T) -> ValidationReport {
    let data = match serde_json::to_value(draft) {
        Ok(Value::Object(map)) => map,
        _ => serde_json::Map::new(),
    };
    validate(schema, &data)
}

fn validate_field(field: &FieldSchema, value: Option<&Value>) -> Option<FieldError> {
    for rule in &field.rules {
        if violated(&rule.check, value) {
            return Some(FieldError {
                field: field.field.to_string(),
                message: rule.message.to_string(),
            });
        }
    }
    None
}

// ---- individual checks ----

fn violated(check: &Check, value: Option<&Value>) -> bool {
    match check {
        Check::Required => is_missing(value),
        Check::MinLength(min) => match as_str(value) {
            Some(s) => s.chars().count() < *min,
            None => false,
        },
        Check::MaxLength(max) => match as_str(value) {
            Some(s) => s.chars().count() > *max,
            None => false,
        },
        Check::Positive => match as_number(value) {
            Some(n) => n <= 0.0,
            None => false,
        },
        Check::MaxValue(max) => match as_number(value) {
            Some(n) => n > *max,
            None => false,
        },
        Check::OneOf(allowed) => match as_str(value) {
            Some(s) => !allowed.contains(&s),
            None => false,
        },
        Check::Pattern(pattern) => match as_str(value) {
            Some(s) => match Regex::new(pattern) {
                Ok(re) => !re.is_match(s),
                Err(_) => false, // Invalid pattern never fires
            },
            None => false,
        },
        Check::Email => match as_str(value) {
            Some(s) => !s.validate_email(),
            None => false,
        },
    }
}

/// Absent, null, and empty-string values all count as missing.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

fn as_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(|v| v.as_str())
}

fn as_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(|v| v.as_f64())
}
