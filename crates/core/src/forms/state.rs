//! Draft state for one form: values, touched set, live report.

use std::collections::HashSet;

use serde_json::Value;

use super::evaluator::validate;
use super::rules::{FormSchema, ValidationReport};

/// Owns a form's draft values and re-validates on every change.
///
/// Field errors become visible only once the field has been touched
/// (blurred), while [`is_submittable`](FormState::is_submittable)
/// always reflects the full report. Untouched-but-invalid fields still
/// block submission; they just do not show a message yet.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: FormSchema,
    values: serde_json::Map<String, Value>,
    touched: HashSet<String>,
    report: ValidationReport,
}

impl FormState {
    /// Create an empty form for the given schema.
    pub fn new(schema: FormSchema) -> Self {
        let values = serde_json::Map::new();
        let report = validate(&schema, &values);
        Self {
            schema,
            values,
            touched: HashSet::new(),
            report,
        }
    }

    /// Create a form prefilled from a draft (the edit flow).
    ///
    /// Drafts that do not serialize to an object start the form empty.
    pub fn with_values<T: serde::Serialize>(schema: FormSchema, draft: &T) -> Self {
        let values = match serde_json::to_value(draft) {
            Ok(Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        };
        let report = validate(&schema, &values);
        Self {
            schema,
            values,
            touched: HashSet::new(),
            report,
        }
    }

    /// Set a field value and re-validate the whole draft.
    pub fn set_value(&mut self, field: &str, value: Value) {
        self.values.insert(field.to_string(), value);
        self.report = validate(&self.schema, &self.values);
    }

    /// Mark a field as touched (blur).
    pub fn touch(&mut self, field: &str) {
        self.touched.insert(field.to_string());
    }

    /// The error message for a field, only once it has been touched.
    pub fn visible_error(&self, field: &str) -> Option<&str> {
        if !self.touched.contains(field) {
            return None;
        }
        self.report.error_for(field)
    }

    /// The error message for a field regardless of touched state.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.report.error_for(field)
    }

    /// Whether every rule in the active schema currently passes.
    pub fn is_submittable(&self) -> bool {
        self.report.is_valid
    }

    /// Current draft values as the JSON object that would be submitted.
    pub fn values(&self) -> &serde_json::Map<String, Value> {
        &self.values
    }

    /// The full report for the current values.
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// The active schema.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Swap in a different schema, re-validating the current values.
    ///
    /// Values and touched state carry over (the login/signup toggle
    /// shares its email and password inputs); errors belonging only to
    /// fields the new schema does not know disappear with the rebuild.
    pub fn switch_schema(&mut self, schema: FormSchema) {
        self.schema = schema;
        self.report = validate(&self.schema, &self.values);
    }
}
