//! Field extraction: strategies, per-field extractors, and the registry.

pub mod company;
pub mod date;
mod patterns;
pub mod position;
pub mod strategy;
pub mod vehicle;
pub mod weight;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::config::ParserConfig;
use crate::models::document::OcrDocument;
use crate::models::slip::{Weight, WeightKind};

pub use company::CompanyExtractor;
pub use date::DateExtractor;
pub use position::PositionHelper;
pub use strategy::{ExtractionStrategy, SpatialProximityStrategy, TextProximityStrategy};
pub use vehicle::VehicleNumberExtractor;
pub use weight::WeightExtractor;

/// Extracts one field from an OCR document.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field, or nothing when it cannot be located.
    fn extract(&self, document: &OcrDocument) -> Option<Self::Output>;
}

/// Shared strategy-iteration engine behind every field extractor.
///
/// Strategies are sorted by priority once at construction. Each strategy
/// gets a chance in turn: a raw value that fails the field's post-processing
/// does not stop the chain, the next strategy still runs.
pub(crate) struct ExtractionEngine {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl ExtractionEngine {
    pub fn new(config: &ParserConfig) -> Self {
        let mut strategies: Vec<Box<dyn ExtractionStrategy>> = vec![
            Box::new(TextProximityStrategy::new(config)),
            Box::new(SpatialProximityStrategy::new(config)),
        ];
        strategies.sort_by_key(|strategy| strategy.priority());
        Self { strategies }
    }

    /// Run the chain; the first raw value the post-processor accepts wins.
    pub fn extract<T>(
        &self,
        document: &OcrDocument,
        keywords: &[&str],
        post_process: impl Fn(&str) -> Option<T>,
    ) -> Option<T> {
        for strategy in &self.strategies {
            if !strategy.supports(document) {
                continue;
            }
            if let Some(raw) = strategy.extract(document, keywords) {
                if let Some(value) = post_process(&raw) {
                    return Some(value);
                }
            }
        }
        None
    }
}

/// A successfully extracted field, erased for registry storage.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Date(NaiveDate),
    Text(String),
    Weights(HashMap<WeightKind, Weight>),
}

/// Object-safe view of a field extractor, for name-keyed dispatch.
pub trait ValueExtractor: Send + Sync {
    fn extract_value(&self, document: &OcrDocument) -> Option<FieldValue>;
}

/// Holds one extractor instance per named field.
pub struct ExtractorRegistry {
    extractors: HashMap<&'static str, Box<dyn ValueExtractor>>,
}

impl ExtractorRegistry {
    /// Field names the pipeline asks for.
    pub const FIELDS: [&'static str; 4] = ["date", "vehicle_number", "company", "weight"];

    pub fn new(config: &ParserConfig) -> Self {
        let mut extractors: HashMap<&'static str, Box<dyn ValueExtractor>> = HashMap::new();
        extractors.insert("date", Box::new(DateExtractor::new(config)));
        extractors.insert("vehicle_number", Box::new(VehicleNumberExtractor::new(config)));
        extractors.insert("company", Box::new(CompanyExtractor::new(config)));
        extractors.insert("weight", Box::new(WeightExtractor::new(config)));
        Self { extractors }
    }

    /// Look up an extractor by field name.
    pub fn get(&self, field_name: &str) -> Option<&dyn ValueExtractor> {
        self.extractors.get(field_name).map(Box::as_ref)
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.extractors.contains_key(field_name)
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}
