// File: src/submit.rs
// Purpose: Post-validation mapping from form values to the submission payload

use crate::value::{FieldValue, FormValues};
use serde_json::Value;

/// The select option that exposes a free-text sibling
pub const OTHER_CHOICE: &str = "other";

// Select fields paired with the free-text field that backs their
// "other" option
const OTHER_TEXT_FIELDS: &[(&str, &str)] = &[
    ("housing", "housing_other"),
    ("income_source", "income_source_other"),
];

/// Folds each "other" selection into its governing field and drops
/// the sibling key. This is a data-transform step, not validation: it
/// runs after the form has passed and before serialization.
pub fn resolve_other_selections(form: &FormValues) -> FormValues {
    let mut resolved = form.clone();
    for (field, other_field) in OTHER_TEXT_FIELDS {
        if resolved.text(field) == OTHER_CHOICE {
            let replacement = resolved.text(other_field).trim().to_string();
            if !replacement.is_empty() {
                resolved.insert(*field, replacement);
            }
        }
        resolved.remove(other_field);
    }
    resolved
}

/// Serializes a form into the JSON object the backend accepts. Upload
/// fields carry their metadata only; the bytes travel as multipart
/// alongside the payload.
pub fn to_payload(form: &FormValues) -> Value {
    let mut object = serde_json::Map::new();
    for (field, value) in form.iter() {
        object.insert(field.clone(), json_value(value));
    }
    Value::Object(object)
}

fn json_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(s) => Value::String(s.clone()),
        FieldValue::Number(n) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        FieldValue::Bool(b) => Value::Bool(*b),
        FieldValue::List(items) => {
            Value::Array(items.iter().map(|s| Value::String(s.clone())).collect())
        }
        FieldValue::File(meta) => serde_json::to_value(meta).unwrap_or(Value::Null),
        FieldValue::Missing => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_other_substitution() {
        let form = FormValues::new()
            .with("housing", "other")
            .with("housing_other", "سكن خيري");
        let resolved = resolve_other_selections(&form);
        assert_eq!(resolved.text("housing"), "سكن خيري");
        assert!(resolved.get("housing_other").is_none());
    }

    #[test]
    fn test_sibling_dropped_when_condition_not_met() {
        let form = FormValues::new()
            .with("housing", "rented")
            .with("housing_other", "نص قديم");
        let resolved = resolve_other_selections(&form);
        assert_eq!(resolved.text("housing"), "rented");
        assert!(resolved.get("housing_other").is_none());
    }

    #[test]
    fn test_blank_replacement_keeps_selection() {
        let form = FormValues::new()
            .with("housing", "other")
            .with("housing_other", "   ");
        let resolved = resolve_other_selections(&form);
        assert_eq!(resolved.text("housing"), "other");
    }

    #[test]
    fn test_payload_shapes() {
        let form = FormValues::new()
            .with("name", "سارة")
            .with("family_count", 4i64)
            .with("consent", true)
            .with(
                "goals",
                vec!["نشر العلم".to_string(), "كفالة يتيم".to_string()],
            );
        let payload = to_payload(&form);
        assert_eq!(payload["name"], json!("سارة"));
        assert_eq!(payload["family_count"], json!(4.0));
        assert_eq!(payload["consent"], json!(true));
        assert_eq!(payload["goals"], json!(["نشر العلم", "كفالة يتيم"]));
    }

    #[test]
    fn test_file_serializes_as_metadata() {
        let meta = ataa_validation::FileMeta {
            name: "id.png".to_string(),
            size_bytes: 2048,
            mime_type: "image/png".to_string(),
        };
        let form = FormValues::new().with("id_copy", meta);
        let payload = to_payload(&form);
        assert_eq!(
            payload["id_copy"],
            json!({"name": "id.png", "size_bytes": 2048, "mime_type": "image/png"})
        );
    }
}
