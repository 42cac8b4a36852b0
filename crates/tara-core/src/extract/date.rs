//! Measurement date extraction.

use chrono::NaiveDate;

use crate::models::config::ParserConfig;
use crate::models::document::OcrDocument;

use super::patterns::DATE_PATTERN;
use super::{ExtractionEngine, FieldExtractor, FieldValue, ValueExtractor};

const KEYWORDS: &[&str] = &["measurement date", "date", "date-time", "계량일자", "날짜", "일시"];

/// Extracts the measurement date.
///
/// Falls back to scanning every line for a date pattern when no keyword
/// line yields one.
pub struct DateExtractor {
    engine: ExtractionEngine,
}

impl DateExtractor {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            engine: ExtractionEngine::new(config),
        }
    }

    fn fallback(&self, document: &OcrDocument) -> Option<NaiveDate> {
        document.lines.iter().find_map(|line| parse_date(line))
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    fn extract(&self, document: &OcrDocument) -> Option<NaiveDate> {
        self.engine
            .extract(document, KEYWORDS, |raw| parse_date(raw))
            .or_else(|| self.fallback(document))
    }
}

impl ValueExtractor for DateExtractor {
    fn extract_value(&self, document: &OcrDocument) -> Option<FieldValue> {
        self.extract(document).map(FieldValue::Date)
    }
}

/// First valid calendar date matching YYYY[-.]MM[-.]DD anywhere in the text.
pub(crate) fn parse_date(text: &str) -> Option<NaiveDate> {
    for caps in DATE_PATTERN.captures_iter(text) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        assert_eq!(parse_date("2026-02-02"), Some(expected));
        assert_eq!(parse_date("2026.02.02"), Some(expected));
        assert_eq!(parse_date("20260202"), Some(expected));
        assert_eq!(parse_date("issued 2026-02-02 09:15"), Some(expected));
    }

    #[test]
    fn test_parse_date_rejects_invalid_calendar_dates() {
        assert_eq!(parse_date("2026-13-02"), None);
        assert_eq!(parse_date("2026-02-30"), None);
        assert_eq!(parse_date("no date"), None);
    }

    #[test]
    fn test_parse_date_skips_invalid_then_finds_valid() {
        let expected = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();
        assert_eq!(parse_date("2026-99-99 then 2026-02-02"), Some(expected));
    }

    #[test]
    fn test_extract_with_keyword() {
        let extractor = DateExtractor::new(&ParserConfig::default());
        let doc = OcrDocument::from_lines(["measurement date: 2026-02-02"]);
        assert_eq!(
            extractor.extract(&doc),
            NaiveDate::from_ymd_opt(2026, 2, 2)
        );
    }

    #[test]
    fn test_fallback_without_keyword() {
        let extractor = DateExtractor::new(&ParserConfig::default());
        let doc = OcrDocument::from_lines(["weigh slip no. 42", "2026-02-02 09:15"]);
        assert_eq!(
            extractor.extract(&doc),
            NaiveDate::from_ymd_opt(2026, 2, 2)
        );
    }

    #[test]
    fn test_no_date_anywhere() {
        let extractor = DateExtractor::new(&ParserConfig::default());
        let doc = OcrDocument::from_lines(["no dates in this slip"]);
        assert!(extractor.extract(&doc).is_none());
    }
}
