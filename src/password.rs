// 🔒 Password Policy - Rule-based validation and strength scoring
// Five independent rules, all evaluated on every call so the caller sees
// every violation at once, not just the first.

use serde::{Deserialize, Serialize};

// Special-character sets. The policy set and the scorer set genuinely
// differ (the scorer omits '=' and '-'); both are contract, do not unify.
const POLICY_SPECIALS: &str = "!@#$%^&*()_+=[{]};:<>|./?,-";
const SCORER_SPECIALS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

const MIN_LENGTH: usize = 8;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    /// Violation messages in fixed rule order: length, uppercase,
    /// lowercase, digit, special character
    pub violations: Vec<String>,
}

// ============================================================================
// POLICY VALIDATOR
// ============================================================================

/// Evaluate a password against the full rule set
pub fn validate(password: &str) -> PasswordValidationResult {
    let mut violations = Vec::new();

    // Rule 1: Minimum length
    if password.chars().count() < MIN_LENGTH {
        violations.push("Must be at least 8 characters long.".to_string());
    }

    // Rule 2: Contains at least one uppercase letter
    if !password.chars().any(|c| c.is_uppercase()) {
        violations.push("Must contain at least one uppercase letter.".to_string());
    }

    // Rule 3: Contains at least one lowercase letter
    if !password.chars().any(|c| c.is_lowercase()) {
        violations.push("Must contain at least one lowercase letter.".to_string());
    }

    // Rule 4: Contains at least one digit
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push("Must contain at least one digit.".to_string());
    }

    // Rule 5: Contains at least one special character
    if !password.chars().any(|c| POLICY_SPECIALS.contains(c)) {
        violations.push("Must contain at least one special character.".to_string());
    }

    PasswordValidationResult {
        is_valid: violations.is_empty(),
        violations,
    }
}

// ============================================================================
// STRENGTH SCORER
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordStrength {
    /// Number of satisfied rules, 0..=5
    pub score: u8,
    pub label: String,
}

/// Score a password by counting satisfied rules and map to a label
pub fn score(password: &str) -> PasswordStrength {
    let mut score: u8 = 0;

    if password.chars().count() >= MIN_LENGTH {
        score += 1;
    }
    if password.chars().any(|c| c.is_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| SCORER_SPECIALS.contains(c)) {
        score += 1;
    }

    let label = match score {
        5 => "Very Strong",
        4 => "Strong",
        3 => "Medium",
        2 => "Weak",
        _ => "Very Weak",
    };

    PasswordStrength {
        score,
        label: label.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
