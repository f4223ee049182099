// 🔑 Password Generator - Random and passphrase generation

use rand::Rng;
use std::fmt;

const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const COMPLEX: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+[]{}|;:,.<>?";

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 128;

/// Word list for memorable passphrases
const WORD_LIST: &[&str] = &[
    "apple",
    "banana",
    "cherry",
    "date",
    "elderberry",
    "fig",
    "grape",
    "honeydew",
];

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Requested length outside 8..=128
    BadLength { length: usize },
    /// Passphrase word count outside 3..=10
    BadWordCount { count: usize },
    /// Passphrase word not in the word list
    UnknownWord { word: String },
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::BadLength { .. } => {
                write!(f, "Password length must be between 8 and 128 characters.")
            }
            GeneratorError::BadWordCount { .. } => {
                write!(f, "Number of words must be between 3 and 10.")
            }
            GeneratorError::UnknownWord { word } => {
                write!(f, "Word '{}' is not in the word list.", word)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

// ============================================================================
// GENERATORS
// ============================================================================

fn random_from(charset: &str, length: usize) -> Result<String, GeneratorError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(GeneratorError::BadLength { length });
    }

    let bytes = charset.as_bytes();
    let mut rng = rand::thread_rng();
    let password = (0..length)
        .map(|_| bytes[rng.gen_range(0..bytes.len())] as char)
        .collect();
    Ok(password)
}

/// Random password from letters and digits only
pub fn simple(length: usize) -> Result<String, GeneratorError> {
    random_from(ALPHANUMERIC, length)
}

/// Random password including special characters
pub fn complex(length: usize) -> Result<String, GeneratorError> {
    random_from(COMPLEX, length)
}

/// Build a hyphen-joined passphrase from comma-separated words.
///
/// Every word must come from the fixed word list (matched
/// case-insensitively, joined as given); 3 to 10 words allowed.
pub fn memorable(words: &str) -> Result<String, GeneratorError> {
    let parts: Vec<&str> = words
        .split(',')
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .collect();

    if !(3..=10).contains(&parts.len()) {
        return Err(GeneratorError::BadWordCount { count: parts.len() });
    }

    for word in &parts {
        if !WORD_LIST.contains(&word.to_lowercase().as_str()) {
            return Err(GeneratorError::UnknownWord {
                word: word.to_string(),
            });
        }
    }

    Ok(parts.join("-"))
}

// ============================================================================
// TESTS
// ============================================================================
