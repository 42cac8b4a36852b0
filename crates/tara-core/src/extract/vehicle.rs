//! Vehicle number extraction.

use crate::models::config::ParserConfig;
use crate::models::document::OcrDocument;
use crate::text::TextNormalizer;

use super::patterns::VEHICLE_PATTERN;
use super::{ExtractionEngine, FieldExtractor, FieldValue, ValueExtractor};

const KEYWORDS: &[&str] = &[
    "vehicle number",
    "vehicle no",
    "car number",
    "차량번호",
    "차량No",
    "차번호",
    "차량",
];

/// Extracts the vehicle identifier: a plate like "12가3456" or a bare
/// 4-digit slip number like "8713".
pub struct VehicleNumberExtractor {
    engine: ExtractionEngine,
    normalizer: TextNormalizer,
}

impl VehicleNumberExtractor {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            engine: ExtractionEngine::new(config),
            normalizer: TextNormalizer::new(),
        }
    }

    fn post_process(&self, raw: &str) -> Option<String> {
        if raw.is_empty() {
            return None;
        }

        let cleaned = self.normalizer.remove_whitespace(raw);
        VEHICLE_PATTERN
            .captures(&cleaned)
            .map(|caps| caps[1].to_string())
    }
}

impl FieldExtractor for VehicleNumberExtractor {
    type Output = String;

    fn extract(&self, document: &OcrDocument) -> Option<String> {
        self.engine
            .extract(document, KEYWORDS, |raw| self.post_process(raw))
    }
}

impl ValueExtractor for VehicleNumberExtractor {
    fn extract_value(&self, document: &OcrDocument) -> Option<FieldValue> {
        self.extract(document).map(FieldValue::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> VehicleNumberExtractor {
        VehicleNumberExtractor::new(&ParserConfig::default())
    }

    #[test]
    fn test_bare_slip_number() {
        let doc = OcrDocument::from_lines(["vehicle number: 8713"]);
        assert_eq!(extractor().extract(&doc).as_deref(), Some("8713"));
    }

    #[test]
    fn test_korean_plate() {
        let doc = OcrDocument::from_lines(["차량번호: 12가3456"]);
        assert_eq!(extractor().extract(&doc).as_deref(), Some("12가3456"));
    }

    #[test]
    fn test_plate_with_internal_spacing() {
        let doc = OcrDocument::from_lines(["차량번호: 12가 3456"]);
        assert_eq!(extractor().extract(&doc).as_deref(), Some("12가3456"));
    }

    #[test]
    fn test_rejects_non_numeric_value() {
        let doc = OcrDocument::from_lines(["vehicle number: unreadable"]);
        assert!(extractor().extract(&doc).is_none());
    }

    #[test]
    fn test_missing_field() {
        let doc = OcrDocument::from_lines(["gross weight: 12,480 kg"]);
        assert!(extractor().extract(&doc).is_none());
    }
}
