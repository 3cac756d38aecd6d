// File: src/value.rs
// Purpose: Field value model for one form editing session

use ataa_validation::FileMeta;
use std::collections::HashMap;

/// A single field's value as collected by the form UI
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
    File(FileMeta),
    Missing,
}

static MISSING: FieldValue = FieldValue::Missing;

impl FieldValue {
    /// Text content, or None for non-textual variants
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text content, with non-textual variants degrading to empty
    pub fn text_or_empty(&self) -> &str {
        self.as_text().unwrap_or("")
    }

    /// Numeric content; text that parses as a number counts
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileMeta> {
        match self {
            FieldValue::File(meta) => Some(meta),
            _ => None,
        }
    }

    /// Whether the required check treats this value as absent.
    /// Numbers, booleans, lists, and files are never blank; zero and
    /// false are real answers.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Missing => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<FileMeta> for FieldValue {
    fn from(meta: FileMeta) -> Self {
        FieldValue::File(meta)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Missing)
    }
}

/// The values of one form, owned by the UI for the lifetime of an
/// editing session and discarded on submit or navigation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    fields: HashMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Builder-style insert for literal form construction
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// The field's value, with absent fields reading as `Missing`
    pub fn value_or_missing(&self, field: &str) -> &FieldValue {
        self.fields.get(field).unwrap_or(&MISSING)
    }

    /// The field's text, with absent or non-text fields reading as empty
    pub fn text(&self, field: &str) -> &str {
        self.value_or_missing(field).text_or_empty()
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.remove(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
