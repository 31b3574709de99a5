//! Flow-level failure taxonomy.

use playbill_client::ApiError;
use playbill_core::ValidationReport;

/// What a flow hands back to the view that started it.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// The draft failed client-side validation. No request was issued.
    #[error("draft failed validation: {}", .0.summary())]
    Invalid(ValidationReport),

    /// The server rejected the operation, or could not be reached.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The initiating view was torn down before the response arrived.
    /// Nothing was mutated on its behalf.
    #[error("operation cancelled")]
    Cancelled,
}

impl FlowError {
    /// One display string for a form view, whatever shape the failure
    /// took. Cancelled flows render nothing.
    pub fn form_message(&self) -> String {
        match self {
            FlowError::Invalid(report) => report.summary(),
            FlowError::Api(err) => err.display_message(),
            FlowError::Cancelled => String::new(),
        }
    }

    /// The per-field report, when the failure was local validation.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            FlowError::Invalid(report) => Some(report),
            _ => None,
        }
    }
}
