//! Numeric validation functions

/// Validates that a number is strictly positive.
pub fn validate_positive(value: f64, label: &str) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} يجب أن يكون رقمًا موجبًا", label))
    }
}

/// Validates that text holds a strictly positive number. Blank input
/// passes; non-numeric text fails the same way a non-positive number
/// does.
pub fn validate_positive_text(value: &str, label: &str) -> Result<(), String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    match trimmed.parse::<f64>() {
        Ok(n) => validate_positive(n, label),
        Err(_) => Err(format!("{} يجب أن يكون رقمًا موجبًا", label)),
    }
}

/// Validates that a number is a whole count of at least one.
pub fn validate_positive_count(value: f64, label: &str) -> Result<(), String> {
    if value.is_finite() && value >= 1.0 && value.fract() == 0.0 {
        Ok(())
    } else {
        Err(format!("{} يجب أن يكون عددًا صحيحًا موجبًا", label))
    }
}
