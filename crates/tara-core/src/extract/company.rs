//! Counterparty (company) name extraction.

use crate::models::config::ParserConfig;
use crate::models::document::OcrDocument;
use crate::text::TextNormalizer;

use super::{ExtractionEngine, FieldExtractor, FieldValue, ValueExtractor};

const KEYWORDS: &[&str] = &["counterparty", "company name", "거래처", "상호"];

/// Extracts the counterparty name printed on the slip.
pub struct CompanyExtractor {
    engine: ExtractionEngine,
    normalizer: TextNormalizer,
}

impl CompanyExtractor {
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

        let cleaned = self.normalizer.remove_special_chars(raw);
        let cleaned = cleaned.trim();
        (!cleaned.is_empty()).then(|| cleaned.to_string())
    }
}

impl FieldExtractor for CompanyExtractor {
    type Output = String;

    fn extract(&self, document: &OcrDocument) -> Option<String> {
        self.engine
            .extract(document, KEYWORDS, |raw| self.post_process(raw))
    }
}

impl ValueExtractor for CompanyExtractor {
    fn extract_value(&self, document: &OcrDocument) -> Option<FieldValue> {
        self.extract(document).map(FieldValue::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> CompanyExtractor {
        CompanyExtractor::new(&ParserConfig::default())
    }

    #[test]
    fn test_extracts_company_name() {
        let doc = OcrDocument::from_lines(["counterparty: Acme Aggregates"]);
        assert_eq!(extractor().extract(&doc).as_deref(), Some("Acme Aggregates"));
    }

    #[test]
    fn test_korean_keyword() {
        let doc = OcrDocument::from_lines(["거래처: 한일건설"]);
        assert_eq!(extractor().extract(&doc).as_deref(), Some("한일건설"));
    }

    #[test]
    fn test_missing_company() {
        let doc = OcrDocument::from_lines(["gross weight: 12,480 kg"]);
        assert!(extractor().extract(&doc).is_none());
    }
}
