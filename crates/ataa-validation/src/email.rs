//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

// Simple local@domain.tld shape, not full RFC 5322
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Validates email shape. Blank input passes.
pub fn validate_email(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    if EMAIL_REGEX.is_match(trimmed) {
        Ok(())
    } else {
        Err("البريد الإلكتروني غير صحيح".to_string())
    }
}
