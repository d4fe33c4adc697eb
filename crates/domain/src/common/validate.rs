//! Field validation helpers.
//!
//! Each helper checks one rule and reports failures through
//! [`DomainError`], carrying the field name so messages stay
//! substring-matchable from calling code and tests.

use crate::error::DomainError;

/// Validates that a required string has at least one non-whitespace
/// character, returning the trimmed value.
///
/// # Examples
///
/// ```
/// use renoplan_domain::common::non_blank;
///
/// assert_eq!(non_blank("color", "  Blue ").unwrap(), "Blue");
/// assert!(non_blank("color", "   ").is_err());
/// ```
pub fn non_blank(field: &'static str, value: impl Into<String>) -> Result<String, DomainError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::missing(field));
    }
    Ok(trimmed.to_string())
}

/// Validates that a numeric value is strictly positive, returning it as
/// an unsigned quantity.
pub fn non_zero_positive(field: &'static str, value: i64) -> Result<u32, DomainError> {
    if value <= 0 {
        return Err(DomainError::invalid(
            field,
            value,
            "must be a positive non-zero value",
        ));
    }
    u32::try_from(value)
        .map_err(|_| DomainError::invalid(field, value, "exceeds the supported range"))
}

/// Validates that a value meets a minimum business threshold.
pub fn meets_minimum(field: &'static str, value: u32, minimum: u32) -> Result<u32, DomainError> {
    if value < minimum {
        return Err(DomainError::invalid(
            field,
            value,
            format!("must be at least {minimum} cm"),
        ));
    }
    Ok(value)
}

/// Validates that a floating-point value is zero or greater.
pub fn zero_or_positive(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value < 0.0 {
        return Err(DomainError::invalid(field, value, "must be 0 or greater"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_trims_surrounding_whitespace() {
        assert_eq!(non_blank("name", "  Kitchen  ").unwrap(), "Kitchen");
        assert_eq!(non_blank("name", "Den").unwrap(), "Den");
    }

    #[test]
    fn non_blank_rejects_empty_and_whitespace() {
        for bad in ["", " ", "\t", "   \n "] {
            let err = non_blank("project", bad).unwrap_err();
            assert_eq!(err, DomainError::missing("project"));
        }
    }

    #[test]
    fn non_zero_positive_rejects_zero_and_negatives() {
        for bad in [0, -1, -100] {
            let err = non_zero_positive("width", bad).unwrap_err();
            assert!(err.to_string().contains("width"));
            assert!(err.to_string().contains(&bad.to_string()));
        }
    }

    #[test]
    fn non_zero_positive_accepts_positive_values() {
        assert_eq!(non_zero_positive("width", 200).unwrap(), 200);
    }

    #[test]
    fn meets_minimum_rejects_below_threshold() {
        let err = meets_minimum("height", 99, 100).unwrap_err();
        assert!(err.to_string().contains("height"));
        assert!(err.to_string().contains("at least 100"));
    }

    #[test]
    fn meets_minimum_accepts_boundary() {
        assert_eq!(meets_minimum("height", 100, 100).unwrap(), 100);
    }

    #[test]
    fn zero_or_positive_accepts_zero() {
        assert_eq!(zero_or_positive("years", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn zero_or_positive_rejects_negative() {
        let err = zero_or_positive("years", -1.5).unwrap_err();
        assert!(err.to_string().contains("years"));
    }
}
