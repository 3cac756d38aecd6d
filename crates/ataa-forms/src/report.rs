// File: src/report.rs
// Purpose: Validation outcome types

use std::collections::HashMap;

/// Outcome of validating a single field
///
/// `message` is non-empty exactly when `is_valid` is false.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// Create a passing result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    /// Create a failing result with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }

    /// Convert from a plain validator result
    pub fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(message) => Self::invalid(message),
        }
    }
}

/// Field name to error message, rebuilt wholesale on every pass
pub type FieldErrors = HashMap<String, String>;

/// Outcome of validating a whole form against a schema
#[derive(Debug, Clone)]
pub struct FormReport {
    pub is_valid: bool,
    pub errors: FieldErrors,
}

impl FormReport {
    /// Create a passing report
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: FieldErrors::new(),
        }
    }

    /// Create a failing report
    pub fn failure(errors: FieldErrors) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }

    /// Check if a field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get the error message for a field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }
}
