// 📝 Text Utilities - String manipulation helpers

use serde::{Deserialize, Serialize};

const VOWELS: &str = "aeiouAEIOU";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextCounts {
    pub characters: usize,
    pub words: usize,
    pub vowels: usize,
}

pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn to_uppercase(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Count characters, whitespace-separated words and ASCII vowels
pub fn count(text: &str) -> TextCounts {
    TextCounts {
        characters: text.chars().count(),
        words: text.split_whitespace().count(),
        vowels: text.chars().filter(|c| VOWELS.contains(*c)).count(),
    }
}

/// Case-insensitive palindrome check over the full string, punctuation
/// and spaces included
pub fn is_palindrome(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower == lower.chars().rev().collect::<String>()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("hello"), "olleh");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_case_changes() {
        assert_eq!(to_uppercase("Hello"), "HELLO");
        assert_eq!(to_lowercase("Hello"), "hello");
    }

    #[test]
    fn test_count() {
        let counts = count("Hello wonderful world");
        assert_eq!(counts.characters, 21);
        assert_eq!(counts.words, 3);
        assert_eq!(counts.vowels, 6);
    }

    #[test]
    fn test_count_empty_and_spaces() {
        let counts = count("");
        assert_eq!(counts.words, 0);
        // Repeated spaces don't create phantom words
        assert_eq!(count("a  b").words, 2);
    }

    #[test]
    fn test_palindrome() {
        assert!(is_palindrome("Racecar"));
        assert!(is_palindrome(""));
        assert!(!is_palindrome("hello"));
        // Spaces count, so this classic fails without normalization
        assert!(!is_palindrome("never odd or even"));
    }
}
