//! Extraction strategies: two interchangeable ways to resolve keyword -> value.

use tracing::debug;

use crate::models::config::ParserConfig;
use crate::models::document::OcrDocument;
use crate::text::{TextMatcher, TextNormalizer};

use super::patterns::VALUE_PATTERN;
use super::position::PositionHelper;

/// One tactic for locating a field value near a keyword.
///
/// Consumers run strategies in ascending `priority` order and stop at the
/// first raw value that survives the field's post-processing.
pub trait ExtractionStrategy: Send + Sync {
    /// Whether the document carries the data this strategy needs.
    fn supports(&self, document: &OcrDocument) -> bool;

    /// Try to extract a raw value for one of the keywords.
    fn extract(&self, document: &OcrDocument, keywords: &[&str]) -> Option<String>;

    /// Lower runs first.
    fn priority(&self) -> u8;
}

/// Line-oriented extraction: find the keyword in a line, take what follows.
pub struct TextProximityStrategy {
    matcher: TextMatcher,
    normalizer: TextNormalizer,
}

impl TextProximityStrategy {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            matcher: TextMatcher::new(config),
            normalizer: TextNormalizer::new(),
        }
    }

    fn value_from_line(&self, line: &str, keywords: &[&str]) -> Option<String> {
        let keyword_index = self.matcher.find_keyword_index(line, keywords)?;

        let normalized: Vec<char> = self.normalizer.normalize(line).chars().collect();

        // Slice past the shortest normalized keyword; a longer matched
        // keyword leaves a harmless prefix for the value pattern to skip.
        let min_keyword_len = keywords
            .iter()
            .map(|k| self.normalizer.normalize(k).chars().count())
            .min()?;

        let value_start = keyword_index + min_keyword_len;
        if value_start >= normalized.len() {
            return None;
        }
        let after_keyword: String = normalized[value_start..].iter().collect();

        // Prefer slicing the original line when the literal keyword occurs
        // in it: internal spacing survives for numeric parsing downstream.
        if let Some(original_tail) = after_literal_keyword(line, keywords) {
            return extract_value(&original_tail);
        }

        extract_value(&after_keyword)
    }
}

impl ExtractionStrategy for TextProximityStrategy {
    fn supports(&self, document: &OcrDocument) -> bool {
        !document.lines.is_empty()
    }

    fn extract(&self, document: &OcrDocument, keywords: &[&str]) -> Option<String> {
        for line in &document.lines {
            if !self.matcher.matches(line, keywords) {
                continue;
            }
            if let Some(value) = self.value_from_line(line, keywords) {
                debug!("text-proximity matched {:?} in line {:?}", value, line);
                return Some(value);
            }
        }
        None
    }

    fn priority(&self) -> u8 {
        1
    }
}

/// The tail of the line after the first literal keyword occurrence.
fn after_literal_keyword(line: &str, keywords: &[&str]) -> Option<String> {
    for keyword in keywords {
        if let Some(index) = line.find(keyword) {
            let after = index + keyword.len();
            if after < line.len() {
                return Some(line[after..].to_string());
            }
        }
    }
    None
}

/// Strip a leading label colon, then take the first permissive-pattern
/// match.
fn extract_value(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let cleaned = text.trim();
    let cleaned = cleaned.strip_prefix(':').unwrap_or(cleaned).trim();

    let matched = VALUE_PATTERN.find(cleaned)?;
    let value = matched.as_str().trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Coordinate-oriented extraction: find the keyword's word box, take the
/// nearest word to its right on the same row.
pub struct SpatialProximityStrategy {
    matcher: TextMatcher,
    position: PositionHelper,
}

impl SpatialProximityStrategy {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            matcher: TextMatcher::new(config),
            position: PositionHelper::new(config),
        }
    }
}

impl ExtractionStrategy for SpatialProximityStrategy {
    fn supports(&self, document: &OcrDocument) -> bool {
        !document.words.is_empty()
    }

    fn extract(&self, document: &OcrDocument, keywords: &[&str]) -> Option<String> {
        let label = document
            .words
            .iter()
            .find(|word| self.matcher.matches(&word.text, keywords))?;

        let value = self.position.nearest_right(label, &document.words)?;
        debug!(
            "spatial-proximity matched {:?} right of label {:?}",
            value.text, label.text
        );
        Some(value.text.clone())
    }

    fn priority(&self) -> u8 {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::OcrWord;

    fn word(text: &str, x: i32, y: i32) -> OcrWord {
        OcrWord {
            text: text.to_string(),
            x,
            y,
            width: 60,
            height: 20,
            confidence: None,
        }
    }

    #[test]
    fn test_text_proximity_extracts_after_keyword() {
        let strategy = TextProximityStrategy::new(&ParserConfig::default());
        let doc = OcrDocument::from_lines(["vehicle number: 8713", "other line"]);

        let value = strategy.extract(&doc, &["vehicle number"]).unwrap();
        assert_eq!(value, "8713");
    }

    #[test]
    fn test_text_proximity_keeps_original_spacing() {
        let strategy = TextProximityStrategy::new(&ParserConfig::default());
        let doc = OcrDocument::from_lines(["gross weight: 12,480 kg"]);

        let value = strategy.extract(&doc, &["gross weight"]).unwrap();
        assert_eq!(value, "12,480 kg");
    }

    #[test]
    fn test_text_proximity_no_keyword() {
        let strategy = TextProximityStrategy::new(&ParserConfig::default());
        let doc = OcrDocument::from_lines(["nothing to see"]);
        assert!(strategy.extract(&doc, &["gross weight"]).is_none());
    }

    #[test]
    fn test_text_proximity_requires_lines() {
        let strategy = TextProximityStrategy::new(&ParserConfig::default());
        assert!(!strategy.supports(&OcrDocument::default()));
        assert!(strategy.supports(&OcrDocument::from_lines(["x"])));
    }

    #[test]
    fn test_text_proximity_keyword_at_line_end() {
        let strategy = TextProximityStrategy::new(&ParserConfig::default());
        let doc = OcrDocument::from_lines(["gross weight:"]);
        assert!(strategy.extract(&doc, &["gross weight"]).is_none());
    }

    #[test]
    fn test_spatial_proximity_picks_row_neighbor() {
        let strategy = SpatialProximityStrategy::new(&ParserConfig::default());
        let doc = OcrDocument {
            text: String::new(),
            lines: Vec::new(),
            words: vec![
                word("차량번호", 10, 100),
                word("8713", 200, 105),
                word("12,480", 200, 400),
            ],
            confidence: None,
        };

        let value = strategy.extract(&doc, &["차량번호"]).unwrap();
        assert_eq!(value, "8713");
    }

    #[test]
    fn test_spatial_proximity_requires_words() {
        let strategy = SpatialProximityStrategy::new(&ParserConfig::default());
        assert!(!strategy.supports(&OcrDocument::from_lines(["x"])));
    }

    #[test]
    fn test_priorities() {
        let config = ParserConfig::default();
        assert!(
            TextProximityStrategy::new(&config).priority()
                < SpatialProximityStrategy::new(&config).priority()
        );
    }
}
