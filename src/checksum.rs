// 💳 Checksum Validator - Luhn mod-10
// Validates card-style numeric identifiers (detects single-digit errors
// and most adjacent transpositions)

/// Validate a digit sequence against the Luhn algorithm.
///
/// Non-digit characters (spaces, dashes, letters) are stripped before the
/// checksum runs, so `"4532-0151-1283-0366"` and `"4532015112830366"` are
/// equivalent inputs. Input with no digits at all sums to 0 and therefore
/// validates; callers wanting to reject blank input should check upstream.
pub fn validate(input: &str) -> bool {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();

    let mut sum = 0;
    let mut is_second = false;
    for &digit in digits.iter().rev() {
        let mut d = digit;
        if is_second {
            d *= 2;
        }
        sum += d / 10;
        sum += d % 10;
        is_second = !is_second;
    }

    sum % 10 == 0
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_number() {
        assert!(validate("4532015112830366"));
    }

    #[test]
    fn test_known_invalid_number() {
        assert!(!validate("4532015112830367"));
    }

    #[test]
    fn test_separators_are_stripped() {
        // Same digits, different decoration
        assert!(validate("4532 0151 1283 0366"));
        assert!(validate("4532-0151-1283-0366"));
        assert_eq!(validate("79927398713"), validate("7992-739-8713"));
    }

    #[test]
    fn test_letters_are_ignored_not_rejected() {
        assert!(validate("4532a0151b1283c0366"));
    }

    #[test]
    fn test_empty_input_is_valid() {
        // Boundary policy: no digits -> sum 0 -> divisible by 10
        assert!(validate(""));
        assert!(validate("---"));
    }

    #[test]
    fn test_single_digit() {
        assert!(validate("0"));
        assert!(!validate("1"));
    }

    #[test]
    fn test_classic_test_vector() {
        // 79927398713 is the canonical Luhn example
        assert!(validate("79927398713"));
        assert!(!validate("79927398710"));
        assert!(!validate("79927398714"));
    }
}
