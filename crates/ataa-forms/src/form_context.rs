// File: src/form_context.rs
// Purpose: Context for re-rendering a form with errors and values preserved

use crate::report::{FieldErrors, FormReport};
use crate::value::{FieldValue, FormValues};

/// What a failed submit hands back to the form component: the error
/// map and the values the user already typed
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    /// Field names to error messages
    pub errors: FieldErrors,
    /// Original field values submitted
    pub values: FormValues,
}

impl FormContext {
    /// Create a new form context with errors and values
    pub fn new(errors: FieldErrors, values: FormValues) -> Self {
        Self { errors, values }
    }

    /// Create empty form context
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a context from a validation report
    pub fn from_report(report: FormReport, values: FormValues) -> Self {
        Self {
            errors: report.errors,
            values,
        }
    }

    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get error message for a field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get original value for a field
    pub fn get_value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Merge field errors reported by the backend after a failed
    /// submit. The server is authoritative, so its message wins when
    /// both sides flag the same field.
    pub fn merge_server_errors(&mut self, server_errors: FieldErrors) {
        self.errors.extend(server_errors);
    }
}
