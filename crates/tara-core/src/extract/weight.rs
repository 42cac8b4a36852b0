//! Weight extraction: gross, tare, and net, plus the combining extractor.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::models::config::ParserConfig;
use crate::models::document::OcrDocument;
use crate::models::slip::{Weight, WeightKind};
use crate::text::TextNormalizer;

use super::patterns::{DATE_PATTERN, SPACED_TIME_PATTERN, TIME_PATTERN, WEIGHT_PATTERN};
use super::{ExtractionEngine, FieldExtractor, FieldValue, ValueExtractor};

const GROSS_KEYWORDS: &[&str] = &["gross weight", "total weight", "총중량", "총 중량"];

// Tare keywords stay specific on purpose: a generic "weight" entry here
// would claim lines that belong to the gross/net vocabularies.
const TARE_KEYWORDS: &[&str] = &[
    "tare weight",
    "vehicle weight",
    "empty weight",
    "차중량",
    "공차중량",
    "차량중량",
    "공차",
    "차중",
];

const NET_KEYWORDS: &[&str] = &["net weight", "실중량", "실 중량"];

// Generic weight tokens for the tare fallback, and the specific lines it
// must leave alone.
const GENERIC_WEIGHT_TOKENS: &[&str] = &["weight", "중량"];
const TARE_FALLBACK_EXCLUDED: &[&str] =
    &["grossweight", "totalweight", "netweight", "총중량", "실중량"];

/// Extracts one weight role (gross, tare, or net).
pub struct WeightRoleExtractor {
    kind: WeightKind,
    engine: ExtractionEngine,
    normalizer: TextNormalizer,
}

impl WeightRoleExtractor {
    pub fn new(kind: WeightKind, config: &ParserConfig) -> Self {
        Self {
            kind,
            engine: ExtractionEngine::new(config),
            normalizer: TextNormalizer::new(),
        }
    }

    pub fn kind(&self) -> WeightKind {
        self.kind
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self.kind {
            WeightKind::Gross => GROSS_KEYWORDS,
            WeightKind::Tare => TARE_KEYWORDS,
            WeightKind::Net => NET_KEYWORDS,
        }
    }

    /// Parse a raw value into a weight.
    ///
    /// Any clock time in the value is combined with the document's base date
    /// into a measurement timestamp, then stripped so its digits cannot leak
    /// into the weight number.
    fn post_process(&self, raw: &str, document: &OcrDocument) -> Option<Weight> {
        let base_date = document_base_date(document);
        let time = extract_time(raw);

        let measured_at = combine(base_date, time);

        let cleaned = self.normalizer.remove_time_pattern(raw);
        let caps = WEIGHT_PATTERN.captures(&cleaned)?;
        let number = self.normalizer.normalize_number(&caps[1]);
        let value: f64 = number.parse().ok()?;

        Some(Weight::kg(value).with_measured_at(measured_at))
    }

    fn fallback(&self, document: &OcrDocument) -> Option<Weight> {
        match self.kind {
            WeightKind::Gross => self.first_weight_in_document(document),
            WeightKind::Tare => self.bare_weight_line(document),
            WeightKind::Net => None,
        }
    }

    /// Gross fallback: the first weight+unit hit anywhere in the document.
    fn first_weight_in_document(&self, document: &OcrDocument) -> Option<Weight> {
        let base_date = document_base_date(document);

        for line in &document.lines {
            let time = extract_time(line);
            let measured_at = combine(base_date, time);

            let cleaned = self.normalizer.remove_time_pattern(line);
            if let Some(caps) = WEIGHT_PATTERN.captures(&cleaned) {
                let number = self.normalizer.normalize_number(&caps[1]);
                if let Ok(value) = number.parse::<f64>() {
                    debug!("gross fallback took first weight line {:?}", line);
                    return Some(Weight::kg(value).with_measured_at(measured_at));
                }
            }
        }

        None
    }

    /// Tare fallback: a line with a bare "weight" label that the gross/net
    /// vocabularies do not claim; the value may sit on the next line.
    fn bare_weight_line(&self, document: &OcrDocument) -> Option<Weight> {
        for (index, line) in document.lines.iter().enumerate() {
            let normalized = self.normalizer.normalize(line);
            let generic = GENERIC_WEIGHT_TOKENS.iter().any(|t| normalized.contains(t));
            let claimed = TARE_FALLBACK_EXCLUDED.iter().any(|t| normalized.contains(t));
            if !generic || claimed {
                continue;
            }

            if let Some(raw) = weight_bearing_line(line) {
                debug!("tare fallback took bare weight line {:?}", line);
                return self.post_process(&raw, document);
            }

            // "weight:" label with the value printed on the following line.
            if let Some(next) = document.lines.get(index + 1) {
                if let Some(raw) = weight_bearing_line(next) {
                    debug!("tare fallback took value from line after {:?}", line);
                    return self.post_process(&raw, document);
                }
            }
        }

        None
    }
}

impl FieldExtractor for WeightRoleExtractor {
    type Output = Weight;

    fn extract(&self, document: &OcrDocument) -> Option<Weight> {
        self.engine
            .extract(document, self.keywords(), |raw| {
                self.post_process(raw, document)
            })
            .or_else(|| self.fallback(document))
    }
}

/// First date found anywhere in the document, used as the base for
/// measurement timestamps.
///
/// Deliberately independent of the date extractor: weight extraction must
/// not depend on whether (or in what order) the date field was resolved.
fn document_base_date(document: &OcrDocument) -> Option<NaiveDate> {
    for line in &document.lines {
        for caps in DATE_PATTERN.captures_iter(line) {
            let year: i32 = match caps[1].parse() {
                Ok(y) => y,
                Err(_) => continue,
            };
            let month: u32 = match caps[2].parse() {
                Ok(m) => m,
                Err(_) => continue,
            };
            let day: u32 = match caps[3].parse() {
                Ok(d) => d,
                Err(_) => continue,
            };
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                return Some(date);
            }
        }
    }
    None
}

/// First HH:MM[:SS] clock time in the text, when it is a valid time of day.
fn extract_time(text: &str) -> Option<NaiveTime> {
    let caps = TIME_PATTERN.captures(text)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let second: u32 = caps.get(3).map_or(Ok(0), |m| m.as_str().parse()).ok()?;
    NaiveTime::from_hms_opt(hour, minute, second)
}

fn combine(date: Option<NaiveDate>, time: Option<NaiveTime>) -> Option<NaiveDateTime> {
    match (date, time) {
        (Some(date), Some(time)) => Some(date.and_time(time)),
        _ => None,
    }
}

/// The line with spaced clock times stripped, when a weight+unit remains.
fn weight_bearing_line(line: &str) -> Option<String> {
    let cleaned = SPACED_TIME_PATTERN.replace_all(line, "");
    let cleaned = cleaned.trim();
    (WEIGHT_PATTERN.is_match(cleaned)).then(|| cleaned.to_string())
}

/// Combining extractor: runs the three weight roles and assembles a map.
pub struct WeightExtractor {
    net: WeightRoleExtractor,
    tare: WeightRoleExtractor,
    gross: WeightRoleExtractor,
}

impl WeightExtractor {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            net: WeightRoleExtractor::new(WeightKind::Net, config),
            tare: WeightRoleExtractor::new(WeightKind::Tare, config),
            gross: WeightRoleExtractor::new(WeightKind::Gross, config),
        }
    }
}

impl FieldExtractor for WeightExtractor {
    type Output = HashMap<WeightKind, Weight>;

    fn extract(&self, document: &OcrDocument) -> Option<HashMap<WeightKind, Weight>> {
        let mut weights = HashMap::new();

        // Invocation order is load-bearing: the most specific vocabularies
        // run first so the gross/tare fallbacks cannot absorb a line that a
        // later extractor would claim by keyword.
        for extractor in [&self.net, &self.tare, &self.gross] {
            if let Some(weight) = extractor.extract(document) {
                weights.insert(extractor.kind(), weight);
            }
        }

        (!weights.is_empty()).then_some(weights)
    }
}

impl ValueExtractor for WeightExtractor {
    fn extract_value(&self, document: &OcrDocument) -> Option<FieldValue> {
        self.extract(document).map(FieldValue::Weights)
    }
}
