//! Schema-driven form validation.
//!
//! Provides rule types, a pure evaluator, the concrete form schemas,
//! and per-form draft state -- all without I/O.

pub mod evaluator;
pub mod rules;
pub mod schemas;
pub mod state;

pub use evaluator::{validate, validate_draft};
pub use rules::{Check, FieldError, FieldRule, FieldSchema, FormSchema, ValidationReport};
pub use schemas::{login_schema, production_schema, signup_schema};
pub use state::FormState;
