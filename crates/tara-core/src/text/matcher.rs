//! Keyword matching: exact containment plus edit-distance fallback.

use strsim::levenshtein;

use crate::models::config::ParserConfig;

use super::TextNormalizer;

/// Matches field keywords against OCR text.
///
/// Matching is two-phase: exact substring containment on the normalized
/// forms, then a fuzzy pass for the misreads OCR engines produce.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    normalizer: TextNormalizer,
    fuzzy_threshold: f64,
}

impl TextMatcher {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            fuzzy_threshold: config.fuzzy_match_threshold,
        }
    }

    /// True when any keyword is found in the text, exactly or fuzzily.
    pub fn matches(&self, text: &str, keywords: &[&str]) -> bool {
        if text.is_empty() || keywords.is_empty() {
            return false;
        }

        let normalized_text = self.normalizer.normalize(text);
        for keyword in keywords {
            let normalized_keyword = self.normalizer.normalize(keyword);
            if normalized_text.contains(&normalized_keyword) {
                return true;
            }
        }

        keywords.iter().any(|keyword| self.fuzzy_match(text, keyword))
    }

    /// Start offset (in chars of the normalized text) of the first keyword
    /// that matches exactly, used to slice off the field value.
    pub fn find_keyword_index(&self, text: &str, keywords: &[&str]) -> Option<usize> {
        if text.is_empty() || keywords.is_empty() {
            return None;
        }

        let normalized_text = self.normalizer.normalize(text);

        for keyword in keywords {
            let normalized_keyword = self.normalizer.normalize(keyword);
            if let Some(byte_index) = normalized_text.find(&normalized_keyword) {
                return Some(normalized_text[..byte_index].chars().count());
            }
        }

        None
    }

    /// Windowed Levenshtein match of one keyword against the text.
    ///
    /// The window slides one char at a time and has the keyword's length;
    /// comparing the whole string at once would let the length mismatch
    /// between a short keyword and a long line dominate the distance.
    pub fn fuzzy_match(&self, text: &str, keyword: &str) -> bool {
        let normalized_text: Vec<char> = self.normalizer.normalize(text).chars().collect();
        let normalized_keyword = self.normalizer.normalize(keyword);
        let keyword_len = normalized_keyword.chars().count();

        if keyword_len == 0 || keyword_len > normalized_text.len() {
            return false;
        }

        for start in 0..=normalized_text.len() - keyword_len {
            let window: String = normalized_text[start..start + keyword_len].iter().collect();
            if similarity(&window, &normalized_keyword) >= self.fuzzy_threshold {
                return true;
            }
        }

        false
    }
}

/// similarity = 1 - (distance / max length), in chars.
fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    1.0 - (levenshtein(a, b) as f64 / max_len as f64)
}
