//! Core library for weighing-slip OCR parsing.
//!
//! This crate provides:
//! - Loading of OCR provider responses into a document model
//! - Keyword- and coordinate-based field extraction with fuzzy matching
//! - Weight normalization and business-rule validation
//! - A pipeline that assembles a structured [`WeighingSlip`] with a verdict

pub mod error;
pub mod extract;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod text;
pub mod validate;

pub use error::{LoadError, Result, TaraError};
pub use loader::OcrDocumentLoader;
pub use models::config::ParserConfig;
pub use models::document::{OcrDocument, OcrWord};
pub use models::slip::{ParsingResult, WeighingSlip, Weight, WeightKind};
pub use pipeline::ParsingPipeline;
