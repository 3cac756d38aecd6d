//! Website URL validation

use once_cell::sync::Lazy;
use regex::Regex;

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

/// Validates URL shape. Blank input passes.
pub fn validate_url(value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    if URL_REGEX.is_match(trimmed) {
        Ok(())
    } else {
        Err("رابط الموقع غير صحيح".to_string())
    }
}
