// ✉️ Pattern Validators - Regex shape checks
// Email and phone validation by shape only: no DNS lookups, no carrier
// checks. Malformed input returns false, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

/// local@domain.tld where no part contains '@' or whitespace
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Loose North-American phone shape, e.g. (555) 123-4567, +1 555.123.4567
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+\d{1,2}\s?)?1?\-?\s*\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}$").unwrap());

pub fn is_valid_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

pub fn is_valid_phone(input: &str) -> bool {
    PHONE_RE.is_match(input)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_email() {
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_typical_email() {
        assert!(is_valid_email("jane.doe+tag@example.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_phone_common_formats() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("555.123.4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("+1 555 123 4567"));
    }

    #[test]
    fn test_phone_invalid() {
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("555-123-456"));
        assert!(!is_valid_phone("phone me maybe"));
        assert!(!is_valid_phone(""));
    }
}
