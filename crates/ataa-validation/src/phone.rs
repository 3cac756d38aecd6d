//! Saudi mobile number validation

use once_cell::sync::Lazy;
use regex::Regex;

// Accepted shapes after stripping separators: 05XXXXXXXX,
// 9665XXXXXXXX, +9665XXXXXXXX. The subscriber part always starts
// with 5 followed by eight digits.
static SAUDI_MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+?966|0)5\d{8}$").unwrap());

/// Validates a Saudi mobile number. Blank input passes.
///
/// Spaces and dashes are stripped before matching so users can type
/// `050 123 4567` or `050-123-4567`.
pub fn validate_saudi_phone(value: &str) -> Result<(), String> {
    let normalized: String = value
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();
    if normalized.is_empty() {
        return Ok(());
    }
    if SAUDI_MOBILE_REGEX.is_match(&normalized) {
        Ok(())
    } else {
        Err("رقم الجوال غير صحيح".to_string())
    }
}
