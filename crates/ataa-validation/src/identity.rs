//! Saudi national ID / iqama number validation

/// Validates a Saudi national identity number. Blank input passes.
///
/// Ten digits; the first is 1 for citizens and 2 for residents.
pub fn validate_national_id(value: &str) -> Result<(), String> {
    let normalized: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if normalized.is_empty() {
        return Ok(());
    }
    let valid = normalized.len() == 10
        && normalized.chars().all(|c| c.is_ascii_digit())
        && matches!(normalized.as_bytes()[0], b'1' | b'2');
    if valid {
        Ok(())
    } else {
        Err("رقم الهوية غير صحيح".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citizen_and_resident_prefixes() {
        assert!(validate_national_id("1023456789").is_ok());
        assert!(validate_national_id("2023456789").is_ok());
        assert!(validate_national_id("3023456789").is_err());
    }

    #[test]
    fn test_length_and_digits() {
        assert!(validate_national_id("102345678").is_err());
        assert!(validate_national_id("10234567890").is_err());
        assert!(validate_national_id("10234S6789").is_err());
    }

    #[test]
    fn test_blank_is_valid() {
        assert!(validate_national_id("").is_ok());
        assert!(validate_national_id("  ").is_ok());
    }
}
