//! Saudi IBAN validation

use once_cell::sync::Lazy;
use regex::Regex;

// SA, two check digits, twenty alphanumerics (24 characters total).
// Format check only; the backend runs the mod-97 verification.
static SAUDI_IBAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^SA\d{2}[0-9A-Z]{20}$").unwrap());

/// Validates a Saudi IBAN's shape. Blank input passes.
///
/// Spaces are stripped and letters uppercased first, so the grouped
/// form printed on bank certificates is accepted as typed.
pub fn validate_saudi_iban(value: &str) -> Result<(), String> {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();
    if normalized.is_empty() {
        return Ok(());
    }
    if SAUDI_IBAN_REGEX.is_match(&normalized) {
        Ok(())
    } else {
        Err("رقم الآيبان غير صحيح".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_iban() {
        assert!(validate_saudi_iban("SA0380000000608010167519").is_ok());
    }

    #[test]
    fn test_wrong_country() {
        assert!(validate_saudi_iban("GB0380000000608010167519").is_err());
    }

    #[test]
    fn test_normalization() {
        assert!(validate_saudi_iban("sa03 8000 0000 6080 1016 7519").is_ok());
    }

    #[test]
    fn test_wrong_length() {
        assert!(validate_saudi_iban("SA038000000060801016751").is_err());
        assert!(validate_saudi_iban("SA03800000006080101675199").is_err());
    }

    #[test]
    fn test_blank_is_valid() {
        assert!(validate_saudi_iban("").is_ok());
    }
}
