//! Field-level validation for incoming payloads.
//!
//! Length limits mirror the column CHECK constraints, so a payload that
//! passes here only hits the database for uniqueness and referential
//! integrity checks.

use crate::error::CoreError;

/// Maximum length of a category or task name, in characters.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum length of a description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Unwrap a required field, rejecting the payload when it is absent.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Reject a value longer than `max` characters.
pub fn check_max_len(field: &'static str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_unwraps_present_value() {
        assert_eq!(require("name", Some(7)).unwrap(), 7);
    }

    #[test]
    fn require_rejects_missing_value() {
        let err = require::<String>("name", None).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: name is required");
    }

    #[test]
    fn check_max_len_accepts_boundary() {
        let value = "x".repeat(MAX_NAME_LEN);
        assert!(check_max_len("name", &value, MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn check_max_len_rejects_overflow() {
        let value = "x".repeat(MAX_NAME_LEN + 1);
        let err = check_max_len("name", &value, MAX_NAME_LEN).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: name must be at most 100 characters"
        );
    }

    #[test]
    fn check_max_len_counts_characters_not_bytes() {
        // 100 two-byte characters stay within a 100-character limit.
        let value = "é".repeat(MAX_NAME_LEN);
        assert!(check_max_len("name", &value, MAX_NAME_LEN).is_ok());
    }
}
