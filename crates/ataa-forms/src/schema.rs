// File: src/schema.rs
// Purpose: Schema registry and rule combinators

use crate::report::ValidationResult;
use crate::value::{FieldValue, FormValues};
use ataa_validation::{
    validate_birth_date, validate_email, validate_expiry_date, validate_file,
    validate_max_length, validate_min_length, validate_national_id, validate_positive,
    validate_positive_count, validate_positive_text, validate_required, validate_saudi_iban,
    validate_saudi_phone, validate_url, FileRules,
};
use std::collections::HashMap;
use std::fmt;

/// A single field rule. Rules read the whole form so conditional
/// fields can inspect their governing sibling; the dependency is in
/// the signature, not a hidden lookup.
pub type Validator = Box<dyn Fn(&FieldValue, &FormValues) -> ValidationResult + Send + Sync>;

/// Named, immutable mapping from field name to rule. Built once at
/// startup and only read afterwards; fields outside the mapping are
/// never validated.
pub struct Schema {
    name: &'static str,
    fields: HashMap<&'static str, Validator>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: HashMap::new(),
        }
    }

    /// Register a rule for a field (builder-style)
    pub fn field(mut self, field: &'static str, validator: Validator) -> Self {
        self.fields.insert(field, validator);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn validator(&self, field: &str) -> Option<&Validator> {
        self.fields.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// Applies rules in order; the first failure wins. Used to chain
/// presence with shape, e.g. required then min length.
pub fn all(rules: Vec<Validator>) -> Validator {
    Box::new(move |value, form| {
        for rule in &rules {
            let result = rule(value, form);
            if !result.is_valid {
                return result;
            }
        }
        ValidationResult::valid()
    })
}

/// Guards a rule behind a sibling field's value. When the sibling
/// holds anything else the guarded field is valid regardless of its
/// own content.
pub fn when_field_equals(
    field: &'static str,
    expected: &'static str,
    inner: Validator,
) -> Validator {
    Box::new(move |value, form| {
        if form.text(field) == expected {
            inner(value, form)
        } else {
            ValidationResult::valid()
        }
    })
}

// Rule constructors below wrap the pure validators from
// ataa-validation. Each one maps only the variants it understands and
// treats everything else as absent, so a malformed value degrades to
// "no value" instead of crashing the form.

pub fn required(label: &'static str) -> Validator {
    Box::new(move |value, _| match value {
        FieldValue::Missing => ValidationResult::from_result(validate_required("", label)),
        FieldValue::Text(s) => ValidationResult::from_result(validate_required(s, label)),
        _ => ValidationResult::valid(),
    })
}

pub fn min_len(min: usize, label: &'static str) -> Validator {
    Box::new(move |value, _| match value.as_text() {
        Some(s) => ValidationResult::from_result(validate_min_length(s, min, label)),
        None => ValidationResult::valid(),
    })
}

pub fn max_len(max: usize, label: &'static str) -> Validator {
    Box::new(move |value, _| match value.as_text() {
        Some(s) => ValidationResult::from_result(validate_max_length(s, max, label)),
        None => ValidationResult::valid(),
    })
}

pub fn email() -> Validator {
    Box::new(|value, _| match value.as_text() {
        Some(s) => ValidationResult::from_result(validate_email(s)),
        None => ValidationResult::valid(),
    })
}

pub fn saudi_phone() -> Validator {
    Box::new(|value, _| match value.as_text() {
        Some(s) => ValidationResult::from_result(validate_saudi_phone(s)),
        None => ValidationResult::valid(),
    })
}

pub fn saudi_iban() -> Validator {
    Box::new(|value, _| match value.as_text() {
        Some(s) => ValidationResult::from_result(validate_saudi_iban(s)),
        None => ValidationResult::valid(),
    })
}

pub fn national_id() -> Validator {
    Box::new(|value, _| match value.as_text() {
        Some(s) => ValidationResult::from_result(validate_national_id(s)),
        None => ValidationResult::valid(),
    })
}

pub fn url() -> Validator {
    Box::new(|value, _| match value.as_text() {
        Some(s) => ValidationResult::from_result(validate_url(s)),
        None => ValidationResult::valid(),
    })
}

pub fn positive(label: &'static str) -> Validator {
    Box::new(move |value, _| match value {
        FieldValue::Number(n) => ValidationResult::from_result(validate_positive(*n, label)),
        FieldValue::Text(s) => ValidationResult::from_result(validate_positive_text(s, label)),
        _ => ValidationResult::valid(),
    })
}

pub fn positive_count(label: &'static str) -> Validator {
    Box::new(move |value, _| {
        if value.is_blank() {
            return ValidationResult::valid();
        }
        match value.as_number() {
            Some(n) => ValidationResult::from_result(validate_positive_count(n, label)),
            None => ValidationResult::from_result(validate_positive_text(
                value.text_or_empty(),
                label,
            )),
        }
    })
}

pub fn birth_date(min_age: u32) -> Validator {
    Box::new(move |value, _| match value.as_text() {
        Some(s) => ValidationResult::from_result(validate_birth_date(s, min_age)),
        None => ValidationResult::valid(),
    })
}

pub fn expiry_date() -> Validator {
    Box::new(|value, _| match value.as_text() {
        Some(s) => ValidationResult::from_result(validate_expiry_date(s)),
        None => ValidationResult::valid(),
    })
}

pub fn upload(label: &'static str, rules: FileRules) -> Validator {
    Box::new(move |value, _| {
        ValidationResult::from_result(validate_file(value.as_file(), &rules, label))
    })
}
