//! OCR text noise removal.
//!
//! Scale-house slips arrive with erratic spacing, stray separators and clock
//! times embedded next to the weights; everything here strips that noise so
//! keyword matching can work on a canonical form.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // HH:MM or HH:MM:SS
    static ref TIME: Regex = Regex::new(r"\d{2}:\d{2}(:\d{2})?").unwrap();

    // Thousands separators and embedded spaces inside numbers
    static ref NUMBER_SEPARATOR: Regex = Regex::new(r"[,\s]+").unwrap();

    static ref SPECIAL_CHAR: Regex = Regex::new(r"[:\-_/\\]").unwrap();

    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Canonicalizes text before comparison.
///
/// `normalize` is idempotent: applying it twice yields the same string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Strip all whitespace runs and separator characters.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let result = self.remove_whitespace(text);
        self.remove_special_chars(&result)
    }

    /// Remove every form of whitespace (spaces, tabs, line breaks).
    pub fn remove_whitespace(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        WHITESPACE.replace_all(text, "").into_owned()
    }

    /// Remove colon, hyphen, underscore, slash and backslash characters.
    pub fn remove_special_chars(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        SPECIAL_CHAR.replace_all(text, "").into_owned()
    }

    /// Strip `HH:MM` / `HH:MM:SS` substrings.
    ///
    /// Applied before numeric weight parsing so clock times printed next to
    /// a weight are never mistaken for weight digits.
    pub fn remove_time_pattern(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        TIME.replace_all(text, "").into_owned()
    }

    /// Strip thousands separators: "12,480" -> "12480", "13 460" -> "13460".
    pub fn normalize_number(&self, number_text: &str) -> String {
        if number_text.is_empty() {
            return String::new();
        }
        NUMBER_SEPARATOR.replace_all(number_text, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_whitespace_and_separators() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize("gross weight : 12,480"), "grossweight12,480");
        assert_eq!(normalizer.normalize("총 중량"), "총중량");
        assert_eq!(normalizer.normalize("a-b_c/d\\e"), "abcde");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = TextNormalizer::new();
        for s in [
            "gross weight: 12,480 kg",
            "  tabs\tand\nnewlines  ",
            "차량번호: 8713",
            "",
            "no-noise",
        ] {
            let once = normalizer.normalize(s);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }

    #[test]
    fn test_empty_passes_through() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.remove_time_pattern(""), "");
        assert_eq!(normalizer.normalize_number(""), "");
    }

    #[test]
    fn test_remove_time_pattern() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.remove_time_pattern("12:34 5,010 kg"), " 5,010 kg");
        assert_eq!(normalizer.remove_time_pattern("09:15:30 weight"), " weight");
        assert_eq!(normalizer.remove_time_pattern("no time here"), "no time here");
    }

    #[test]
    fn test_normalize_number() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.normalize_number("12,480"), "12480");
        assert_eq!(normalizer.normalize_number("13 460"), "13460");
        assert_eq!(normalizer.normalize_number("7,470 "), "7470");
    }
}
