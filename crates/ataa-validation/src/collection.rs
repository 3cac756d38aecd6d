//! Collection validation functions

/// Validates minimum number of items in a collection.
pub fn validate_min_items<T>(items: &[T], min: usize, label: &str) -> Result<(), String> {
    if items.len() >= min {
        Ok(())
    } else {
        Err(format!("يجب إضافة {} واحد على الأقل", label))
    }
}

/// Validates that at least one entry in a text list is not blank.
/// Dynamic list widgets submit placeholder rows as empty strings, so a
/// pure length check is not enough.
pub fn validate_non_blank_entries(items: &[String], label: &str) -> Result<(), String> {
    if items.iter().any(|item| !item.trim().is_empty()) {
        Ok(())
    } else {
        Err(format!("يجب إضافة {} واحد على الأقل", label))
    }
}
