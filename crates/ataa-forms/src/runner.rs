// File: src/runner.rs
// Purpose: Generic validation pass over a schema

use crate::report::{FieldErrors, FormReport, ValidationResult};
use crate::schema::Schema;
use crate::value::{FieldValue, FormValues};
use ataa_validation::validate_non_blank_entries;
use tracing::{debug, trace};

/// Validates a single field, typically on blur. A field with no
/// registered rule is always valid.
pub fn validate_field(
    field: &str,
    value: &FieldValue,
    form: &FormValues,
    schema: &Schema,
) -> ValidationResult {
    match schema.validator(field) {
        Some(validator) => validator(value, form),
        None => ValidationResult::valid(),
    }
}

/// Validates a whole form on submit. Walks the schema's fields, never
/// the form's, so extra unrelated keys are ignored and the schema
/// alone decides what gets checked.
pub fn validate_form(form: &FormValues, schema: &Schema) -> FormReport {
    let mut errors = FieldErrors::new();
    for field in schema.field_names() {
        let value = form.value_or_missing(field);
        let result = validate_field(field, value, form, schema);
        if !result.is_valid {
            debug!(field, message = %result.message, "field failed validation");
            errors.insert(field.to_string(), result.message);
        }
    }
    trace!(
        schema = schema.name(),
        errors = errors.len(),
        "form validated"
    );
    if errors.is_empty() {
        FormReport::success()
    } else {
        FormReport::failure(errors)
    }
}

/// Validates the dynamic project-goals list. The list grows and
/// shrinks in the UI, which the per-field schema model does not
/// cover, so it is checked separately on submit.
pub fn validate_goals(goals: &[String]) -> ValidationResult {
    ValidationResult::from_result(validate_non_blank_entries(goals, "هدف"))
}
