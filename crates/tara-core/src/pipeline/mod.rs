//! The parsing pipeline: extract, normalize, validate, assemble.

mod context;

pub use context::ParsingContext;

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info, warn};

use crate::extract::{ExtractorRegistry, FieldValue};
use crate::models::config::ParserConfig;
use crate::models::document::OcrDocument;
use crate::models::slip::{ParsingResult, WeightKind};
use crate::normalize::{DateNormalizer, ValueNormalizer, WeightNormalizer};
use crate::validate::{BusinessRuleValidator, RequiredFieldValidator, Validator};

/// Runs the full extract -> normalize -> validate sequence over one
/// document.
///
/// The pipeline itself is stateless between runs; it can be shared across
/// threads and invoked concurrently, with each invocation owning its own
/// [`ParsingContext`].
pub struct ParsingPipeline {
    registry: ExtractorRegistry,
    date_normalizer: DateNormalizer,
    weight_normalizer: WeightNormalizer,
    validators: Vec<Box<dyn Validator>>,
}

impl ParsingPipeline {
    pub fn new(config: &ParserConfig) -> Self {
        let mut validators: Vec<Box<dyn Validator>> = vec![
            Box::new(BusinessRuleValidator::new(config)),
            Box::new(RequiredFieldValidator::new()),
        ];
        validators.sort_by_key(|validator| validator.order());

        Self {
            registry: ExtractorRegistry::new(config),
            date_normalizer: DateNormalizer::new(),
            weight_normalizer: WeightNormalizer::new(),
            validators,
        }
    }

    /// Parse one document into a result with diagnostics.
    ///
    /// `None` or a contentless document fails immediately with a single
    /// error and no extraction attempt.
    pub fn process(&self, document: Option<&OcrDocument>) -> ParsingResult {
        let Some(document) = document else {
            return ParsingResult::failure_with("no OCR document was provided");
        };
        if document.is_empty() {
            return ParsingResult::failure_with(
                "OCR document contains no text, lines, or words",
            );
        }

        info!(
            "parsing document: {} lines, {} words",
            document.lines.len(),
            document.words.len()
        );

        let mut context = ParsingContext::new(document);

        self.extract_fields(&mut context);
        self.normalize_fields(&mut context);
        self.validate_fields(&mut context);

        self.build_result(context)
    }

    /// Run every registered extractor, writing hits into the slip builder.
    ///
    /// A panic inside one extractor is contained there: it becomes a
    /// warning and the field stays unset while the others still run.
    fn extract_fields(&self, context: &mut ParsingContext<'_>) {
        for field_name in ExtractorRegistry::FIELDS {
            let Some(extractor) = self.registry.get(field_name) else {
                continue;
            };

            let document = context.document();
            let outcome =
                panic::catch_unwind(AssertUnwindSafe(|| extractor.extract_value(document)));

            match outcome {
                Ok(Some(value)) => apply_field(context, field_name, value),
                Ok(None) => debug!("no value extracted for field {field_name}"),
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    warn!("extraction of field {field_name} panicked: {message}");
                    context
                        .add_warning(format!("extraction of {field_name} failed: {message}"));
                }
            }
        }
    }

    /// Apply the value normalizers to the extracted fields.
    fn normalize_fields(&self, context: &mut ParsingContext<'_>) {
        let slip = context.slip_builder_ref().build();

        if let Some(date) = slip.date {
            let normalized = self.date_normalizer.normalize(date);
            context.slip_builder().date(normalized);
        }
        if let Some(weight) = slip.gross_weight {
            let normalized = self.weight_normalizer.normalize(weight);
            context.slip_builder().gross_weight(normalized);
        }
        if let Some(weight) = slip.tare_weight {
            let normalized = self.weight_normalizer.normalize(weight);
            context.slip_builder().tare_weight(normalized);
        }
        if let Some(weight) = slip.net_weight {
            let normalized = self.weight_normalizer.normalize(weight);
            context.slip_builder().net_weight(normalized);
        }
    }

    /// Run all validators in order, collecting every finding.
    fn validate_fields(&self, context: &mut ParsingContext<'_>) {
        let slip = context.slip_builder_ref().build();

        let mut findings = Vec::new();
        for validator in &self.validators {
            findings.extend(validator.validate(&slip));
        }
        for finding in findings {
            context.add_error(finding);
        }

        debug!(
            "validation finished: {} errors, {} warnings",
            context.errors().len(),
            context.warnings().len()
        );
    }

    fn build_result(&self, context: ParsingContext<'_>) -> ParsingResult {
        let slip = context.slip_builder_ref().build();
        let (errors, warnings) = context.into_diagnostics();

        if errors.is_empty() {
            ParsingResult::success(slip, warnings)
        } else {
            warn!("parsing failed with {} errors", errors.len());
            ParsingResult::failure(errors)
        }
    }
}

fn apply_field(context: &mut ParsingContext<'_>, field_name: &str, value: FieldValue) {
    match (field_name, value) {
        ("date", FieldValue::Date(date)) => {
            context.slip_builder().date(date);
        }
        ("vehicle_number", FieldValue::Text(text)) => {
            context.slip_builder().vehicle_number(text);
        }
        ("company", FieldValue::Text(text)) => {
            context.slip_builder().company(text);
        }
        ("weight", FieldValue::Weights(weights)) => {
            for (kind, weight) in weights {
                match kind {
                    WeightKind::Gross => context.slip_builder().gross_weight(weight),
                    WeightKind::Tare => context.slip_builder().tare_weight(weight),
                    WeightKind::Net => context.slip_builder().net_weight(weight),
                };
            }
        }
        (field_name, value) => {
            warn!("extractor for {field_name} produced an unexpected value: {value:?}");
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
