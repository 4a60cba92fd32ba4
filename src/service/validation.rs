//! Field validation for Things and the numeric id guard.

use crate::error::AppError;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Longest accepted `name` or `status`, in characters.
pub const MAX_STRING_LENGTH: usize = 50;

fn id_pattern() -> &'static Regex {
    static ID: OnceLock<Regex> = OnceLock::new();
    ID.get_or_init(|| Regex::new(r"^[0-9]+$").expect("static id pattern"))
}

/// True only for a non-empty string of ASCII decimal digits.
pub fn valid_id(candidate: &str) -> bool {
    id_pattern().is_match(candidate)
}

/// Field name to failure messages, serialized as the envelope `reason`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().flatten().map(String::as_str).collect();
        write!(f, "{}", messages.join(", "))
    }
}

/// Check the state a Thing would be saved with. `name` is required and not blank;
/// both fields are bounded by [`MAX_STRING_LENGTH`].
pub fn validate_thing(name: Option<&str>, status: Option<&str>) -> Result<(), AppError> {
    let mut errors = ValidationErrors::default();
    match name {
        Some(n) if !n.trim().is_empty() => check_length(&mut errors, "name", "Name", n),
        _ => errors.add("name", "Name must not be blank"),
    }
    if let Some(s) = status {
        check_length(&mut errors, "status", "Status", s);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Largest id a client may create. SQLite would never assign another id after `i64::MAX`.
pub const MAX_CLIENT_ID: i64 = i64::MAX - 1;

/// Check an id chosen by the client for a new row.
pub fn validate_new_id(id: i64) -> Result<(), AppError> {
    if id <= MAX_CLIENT_ID {
        return Ok(());
    }
    let mut errors = ValidationErrors::default();
    errors.add("id", format!("Id must be at most {}", MAX_CLIENT_ID));
    Err(AppError::Validation(errors))
}

fn check_length(errors: &mut ValidationErrors, field: &str, label: &str, value: &str) {
    if value.chars().count() > MAX_STRING_LENGTH {
        errors.add(
            field,
            format!("{} must be at most {} characters long", label, MAX_STRING_LENGTH),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_strings_are_valid_ids() {
        assert!(valid_id("1"));
        assert!(valid_id("0042"));
        assert!(valid_id("99999999999999999999"));
    }

    #[test]
    fn everything_else_is_rejected() {
        for bad in ["", "abc", "12a", "-1", "1.5", " 1", "1\n", "１２"] {
            assert!(!valid_id(bad), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn missing_and_blank_name_fail() {
        for name in [None, Some(""), Some("   ")] {
            let Err(AppError::Validation(errors)) = validate_thing(name, None) else {
                panic!("expected validation error for {:?}", name);
            };
            assert_eq!(errors.get("name"), Some(&["Name must not be blank".to_string()][..]));
        }
    }

    #[test]
    fn overlong_fields_report_each_field() {
        let long = "x".repeat(MAX_STRING_LENGTH + 1);
        let Err(AppError::Validation(errors)) = validate_thing(Some(&long), Some(&long)) else {
            panic!("expected validation error");
        };
        assert_eq!(
            errors.get("name"),
            Some(&["Name must be at most 50 characters long".to_string()][..])
        );
        assert!(errors.get("status").is_some());
    }

    #[test]
    fn last_id_is_reserved() {
        assert!(validate_new_id(MAX_CLIENT_ID).is_ok());
        let Err(AppError::Validation(errors)) = validate_new_id(i64::MAX) else {
            panic!("expected validation error");
        };
        assert!(errors.get("id").is_some());
    }

    #[test]
    fn name_alone_is_enough() {
        assert!(validate_thing(Some("widget"), None).is_ok());
        assert!(validate_thing(Some("widget"), Some("done")).is_ok());
    }
}
