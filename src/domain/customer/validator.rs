use regex::Regex;
use std::sync::OnceLock;

use super::errors::CustomerError;
use super::value_objects::{RestCustomer, ValidCustomer};

// ============================================================================
// Customer Validator
// ============================================================================
//
// Rules run in a fixed order and stop at the first violation, so a rejected
// candidate always carries exactly one message:
//   payload present → name present → email present → name length → email format
//
// ============================================================================

pub const MIN_NAME_LENGTH: usize = 3;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is a valid regex")
    })
}

/// Returns the value as received, or `None` when absent or blank
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() >= MIN_NAME_LENGTH
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Validate a candidate for create or update
pub fn validate(candidate: Option<&RestCustomer>) -> Result<ValidCustomer, CustomerError> {
    let candidate = candidate.ok_or(CustomerError::PayloadMissing)?;

    let name = present(candidate.name()).ok_or(CustomerError::EmptyName)?;
    let email = present(candidate.email()).ok_or(CustomerError::EmptyEmail)?;

    if !is_valid_name(name) {
        return Err(CustomerError::InvalidName);
    }
    if !is_valid_email(email) {
        return Err(CustomerError::InvalidEmail);
    }

    Ok(ValidCustomer::new(name.to_string(), email.to_string()))
}

/// Violation messages for a candidate; empty when it may proceed
pub fn violations(candidate: Option<&RestCustomer>) -> Vec<String> {
    match validate(candidate) {
        Ok(_) => Vec::new(),
        Err(e) => vec![e.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: Option<&str>, email: Option<&str>) -> RestCustomer {
        RestCustomer {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_payload() {
        assert_eq!(validate(None), Err(CustomerError::PayloadMissing));
        assert_eq!(violations(None), vec!["O Payload está nulo.".to_string()]);
    }

    #[test]
    fn test_missing_name() {
        let c = candidate(None, Some("x@y.com"));
        assert_eq!(violations(Some(&c)), vec!["O nome está vazio".to_string()]);
    }

    #[test]
    fn test_blank_name_counts_as_empty() {
        let c = candidate(Some("   "), Some("x@y.com"));
        assert_eq!(validate(Some(&c)), Err(CustomerError::EmptyName));
    }

    #[test]
    fn test_missing_email() {
        let c = candidate(Some("x"), None);
        assert_eq!(violations(Some(&c)), vec!["O email está vazio".to_string()]);
    }

    #[test]
    fn test_empty_name_takes_precedence_over_empty_email() {
        let c = candidate(Some(""), Some(""));
        assert_eq!(validate(Some(&c)), Err(CustomerError::EmptyName));
    }

    #[test]
    fn test_short_name() {
        let c = candidate(Some("ab"), Some("x@y.com"));
        assert_eq!(violations(Some(&c)), vec!["O nome está inválido".to_string()]);
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        assert!(is_valid_name("Zoë"));
        assert!(!is_valid_name("Jé"));
    }

    #[test]
    fn test_invalid_email() {
        let c = candidate(Some("abc"), Some("roberto"));
        assert_eq!(violations(Some(&c)), vec!["O email está inválido".to_string()]);
    }

    #[test]
    fn test_invalid_name_takes_precedence_over_invalid_email() {
        let c = candidate(Some("ab"), Some("roberto"));
        assert_eq!(validate(Some(&c)), Err(CustomerError::InvalidName));
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("gustavo@gmail.com"));
        assert!(is_valid_email("a.b@mail.example.org"));
        assert!(!is_valid_email("roberto"));
        assert!(!is_valid_email("@gmail.com"));
        assert!(!is_valid_email("gustavo@gmail"));
        assert!(!is_valid_email("gustavo@.com"));
        assert!(!is_valid_email("gustavo@gmail."));
        assert!(!is_valid_email("gus tavo@gmail.com"));
    }

    #[test]
    fn test_padded_values_are_kept_as_received() {
        let c = candidate(Some(" Gustavo "), Some("gustavo@gmail.com"));
        let valid = validate(Some(&c)).unwrap();
        assert_eq!(valid.name(), " Gustavo ");
        assert_eq!(RestCustomer::from(valid), c);
    }

    #[test]
    fn test_name_length_is_judged_on_value_as_received() {
        let c = candidate(Some(" ab"), Some("x@y.com"));
        assert!(validate(Some(&c)).is_ok());
    }

    #[test]
    fn test_padded_email_fails_format() {
        let c = candidate(Some("Gustavo"), Some(" gustavo@gmail.com "));
        assert_eq!(validate(Some(&c)), Err(CustomerError::InvalidEmail));
    }

    #[test]
    fn test_valid_candidate() {
        let c = candidate(Some("Gustavo"), Some("gustavo@gmail.com"));
        let valid = validate(Some(&c)).unwrap();
        assert_eq!(valid.name(), "Gustavo");
        assert_eq!(valid.email(), "gustavo@gmail.com");
        assert!(violations(Some(&c)).is_empty());
    }
}
