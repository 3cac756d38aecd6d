//! String validation functions
//!
//! Lengths are counted in characters, not bytes: almost all input to
//! these forms is Arabic, where byte length would triple every limit.

/// Validates that a value is present and not only whitespace.
///
/// This is the single opt-in presence check: the other validators all
/// accept a blank value so that optional fields stay optional.
pub fn validate_required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} مطلوب", label))
    } else {
        Ok(())
    }
}

/// Validates minimum character count. Blank input passes; presence is
/// the required check's job.
pub fn validate_min_length(value: &str, min: usize, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Ok(());
    }
    if value.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("{} يجب أن لا يقل عن {} أحرف", label, min))
    }
}

/// Validates maximum character count. Blank input passes.
pub fn validate_max_length(value: &str, max: usize, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Ok(());
    }
    if value.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("{} يجب أن لا يزيد عن {} حرفًا", label, max))
    }
}
