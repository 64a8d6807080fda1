//! Field validation helpers shared by the aggregates.
//!
//! Each helper is a pure function: it either hands back the normalized value
//! or a [`DomainError`] naming the field and the rule it broke. Length rules
//! count characters, not bytes, and apply after trimming.

use event_core::{DomainError, DomainResult};

/// Checks a required text field against an inclusive character range,
/// returning the trimmed value.
pub(crate) fn required_text(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> DomainResult<String> {
    let trimmed = value.trim();
    let length = trimmed.chars().count();
    if length < min || length > max {
        return Err(DomainError::new(format!(
            "{field} must be between {min} and {max} characters, got {length}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Checks an optional text field.
///
/// Absent or blank input normalizes to the empty string; anything else must
/// satisfy the same range rule as a required field.
pub(crate) fn optional_text(
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> DomainResult<String> {
    match value {
        None => Ok(String::new()),
        Some(raw) if raw.trim().is_empty() => Ok(String::new()),
        Some(raw) => required_text(field, raw, min, max),
    }
}

/// Checks that a text field is not blank, returning the trimmed value.
pub(crate) fn non_blank(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::new(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

/// Checks a numeric field against an inclusive range.
pub(crate) fn in_range(field: &str, value: u64, min: u64, max: u64) -> DomainResult<u64> {
    if value < min || value > max {
        return Err(DomainError::new(format!(
            "{field} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims_and_accepts_in_range() {
        let value = required_text("name", "  Linen summer dress, ankle length  ", 25, 500);
        assert_eq!(value.unwrap(), "Linen summer dress, ankle length");
    }

    #[test]
    fn test_required_text_counts_characters_after_trimming() {
        // 24 characters once the padding goes, one short of the minimum.
        let err = required_text("name", "   abcdefghijklmnopqrstuvwx   ", 25, 500).unwrap_err();
        assert_eq!(
            err.to_string(),
            "name must be between 25 and 500 characters, got 24"
        );
    }

    #[test]
    fn test_required_text_counts_characters_not_bytes() {
        // Five characters, ten bytes.
        assert!(required_text("key", "ЦВЕТА", 1, 5).is_ok());
    }

    #[test]
    fn test_required_text_rejects_over_maximum() {
        let long = "x".repeat(501);
        assert!(required_text("description", &long, 25, 500).is_err());
        let at_max = "x".repeat(500);
        assert!(required_text("description", &at_max, 25, 500).is_ok());
    }

    #[test]
    fn test_optional_text_normalizes_absent_and_blank_to_empty() {
        assert_eq!(optional_text("equipment", None, 25, 500).unwrap(), "");
        assert_eq!(optional_text("equipment", Some("   "), 25, 500).unwrap(), "");
    }

    #[test]
    fn test_optional_text_validates_present_values() {
        assert!(optional_text("equipment", Some("too short"), 25, 500).is_err());
        let value = optional_text("equipment", Some("Comes with a spare belt and buttons"), 25, 500);
        assert_eq!(value.unwrap(), "Comes with a spare belt and buttons");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("url", "  /dress-7  ").unwrap(), "/dress-7");
        assert!(non_blank("url", "   ").is_err());
    }

    #[test]
    fn test_in_range_is_inclusive() {
        assert!(in_range("width", 50, 50, 5000).is_ok());
        assert!(in_range("width", 5000, 50, 5000).is_ok());
        assert!(in_range("width", 49, 50, 5000).is_err());
        assert!(in_range("width", 5001, 50, 5000).is_err());
    }
}
