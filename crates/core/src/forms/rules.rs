//! Form rule and report types.

use serde::Serialize;

/// A single validation predicate.
///
/// Checks other than [`Check::Required`] skip absent or null values, so
/// presence is always enforced by a separate `Required` rule and every
/// other rule can assume a value of the right shape or stand down.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    /// Value must be present: not absent, not null, not an empty string.
    Required,
    /// String must have at least this many characters.
    MinLength(usize),
    /// String must have at most this many characters.
    MaxLength(usize),
    /// Number must be strictly greater than zero.
    Positive,
    /// Number must not exceed this ceiling.
    MaxValue(f64),
    /// String must be one of the allowed values.
    OneOf(&'static [&'static str]),
    /// String must match this regex pattern.
    Pattern(&'static str),
    /// String must be a syntactically valid email address.
    Email,
}

/// A predicate paired with the message shown when it fails.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub check: Check,
    pub message: &'static str,
}

/// Ordered rules for one named form field.
///
/// Rules run in declaration order; the first violated rule supplies the
/// field's message.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub field: &'static str,
    pub rules: Vec<FieldRule>,
}

/// A named, ordered set of field schemas -- one per form.
#[derive(Debug, Clone)]
pub struct FormSchema {
    pub name: &'static str,
    pub fields: Vec<FieldSchema>,
}

impl FormSchema {
    /// Look up the schema for a single field.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.field == name)
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Aggregated result of validating one draft against a schema.
///
/// Holds at most one error per field: the first violated rule wins.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationReport {
    /// The error message for a field, if any.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Whether the draft may be submitted.
    pub fn is_submittable(&self) -> bool {
        self.is_valid
    }

    /// All messages joined into one display string, in field order.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}
