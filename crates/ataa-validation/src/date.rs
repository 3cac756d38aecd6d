//! Date validation functions
//!
//! Dates arrive as ISO `YYYY-MM-DD` strings from date inputs. The
//! `*_at` variants take the reference date explicitly so rules stay
//! deterministic under test; the plain variants use the local date.

use chrono::{Datelike, Local, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";

/// Calendar age in whole years on `today`, accounting for whether the
/// birthday has come around yet this year.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Validates a birth date against `today`: must parse, lie strictly in
/// the past, and yield an age of at least `min_age`. Blank input
/// passes.
pub fn validate_birth_date_at(value: &str, min_age: u32, today: NaiveDate) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let birth = NaiveDate::parse_from_str(trimmed, ISO_DATE)
        .map_err(|_| "تاريخ الميلاد غير صحيح".to_string())?;
    if birth >= today {
        return Err("تاريخ الميلاد يجب أن يكون في الماضي".to_string());
    }
    if age_on(birth, today) < min_age as i32 {
        return Err(format!("العمر يجب أن لا يقل عن {} عامًا", min_age));
    }
    Ok(())
}

/// Validates a birth date against the local date.
pub fn validate_birth_date(value: &str, min_age: u32) -> Result<(), String> {
    validate_birth_date_at(value, min_age, Local::now().date_naive())
}

/// Validates that a date lies strictly after `today`. Blank input
/// passes.
pub fn validate_expiry_date_at(value: &str, today: NaiveDate) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let expiry = NaiveDate::parse_from_str(trimmed, ISO_DATE)
        .map_err(|_| "تاريخ الانتهاء غير صحيح".to_string())?;
    if expiry > today {
        Ok(())
    } else {
        Err("تاريخ الانتهاء يجب أن يكون في المستقبل".to_string())
    }
}

/// Validates an expiry date against the local date.
pub fn validate_expiry_date(value: &str) -> Result<(), String> {
    validate_expiry_date_at(value, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_rollover() {
        let birth = date(2000, 6, 15);
        assert_eq!(age_on(birth, date(2026, 6, 14)), 25);
        assert_eq!(age_on(birth, date(2026, 6, 15)), 26);
        assert_eq!(age_on(birth, date(2026, 6, 16)), 26);
    }

    #[test]
    fn test_birth_date_minimum_age() {
        // born 2010: turns 18 on 2028-01-01
        assert!(validate_birth_date_at("2010-01-01", 18, date(2026, 8, 5)).is_err());
        assert!(validate_birth_date_at("2010-01-01", 18, date(2027, 12, 31)).is_err());
        assert!(validate_birth_date_at("2010-01-01", 18, date(2028, 1, 1)).is_ok());
        assert!(validate_birth_date_at("2010-01-01", 18, date(2030, 6, 1)).is_ok());
    }

    #[test]
    fn test_birth_date_must_be_past() {
        let today = date(2026, 8, 5);
        assert!(validate_birth_date_at("2026-08-05", 0, today).is_err());
        assert!(validate_birth_date_at("2027-01-01", 0, today).is_err());
    }

    #[test]
    fn test_birth_date_malformed() {
        let today = date(2026, 8, 5);
        assert!(validate_birth_date_at("01/01/2000", 18, today).is_err());
        assert!(validate_birth_date_at("ليس تاريخًا", 18, today).is_err());
    }

    #[test]
    fn test_expiry_strictly_future() {
        let today = date(2026, 8, 5);
        assert!(validate_expiry_date_at("2026-08-06", today).is_ok());
        assert!(validate_expiry_date_at("2026-08-05", today).is_err());
        assert!(validate_expiry_date_at("2026-08-04", today).is_err());
    }

    #[test]
    fn test_blank_is_valid() {
        let today = date(2026, 8, 5);
        assert!(validate_birth_date_at("", 18, today).is_ok());
        assert!(validate_expiry_date_at("", today).is_ok());
    }
}
