//! Per-run parsing state.

use std::collections::HashMap;

use crate::models::document::OcrDocument;
use crate::models::slip::WeighingSlipBuilder;

/// Mutable state for one pipeline invocation.
///
/// A context is created at the start of a parse, owned by that run alone,
/// and discarded at the end; concurrent parses each get their own.
pub struct ParsingContext<'a> {
    document: &'a OcrDocument,
    slip_builder: WeighingSlipBuilder,
    errors: Vec<String>,
    warnings: Vec<String>,
    metadata: HashMap<String, serde_json::Value>,
}

impl<'a> ParsingContext<'a> {
    pub fn new(document: &'a OcrDocument) -> Self {
        Self {
            document,
            slip_builder: WeighingSlipBuilder::default(),
            errors: Vec::new(),
            warnings: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    pub fn document(&self) -> &'a OcrDocument {
        self.document
    }

    pub fn slip_builder(&mut self) -> &mut WeighingSlipBuilder {
        &mut self.slip_builder
    }

    pub fn slip_builder_ref(&self) -> &WeighingSlipBuilder {
        &self.slip_builder
    }

    /// Record a fatal problem. Empty messages are dropped.
    pub fn add_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        if !error.is_empty() {
            self.errors.push(error);
        }
    }

    /// Record a non-fatal problem. Empty messages are dropped.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        let warning = warning.into();
        if !warning.is_empty() {
            self.warnings.push(warning);
        }
    }

    /// Stash a cross-stage signal.
    pub fn put_metadata(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.metadata.insert(key.into(), value);
    }

    pub fn metadata(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Tear the context apart into the final error and warning lists.
    pub fn into_diagnostics(self) -> (Vec<String>, Vec<String>) {
        (self.errors, self.warnings)
    }
}
