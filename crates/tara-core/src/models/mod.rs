//! Data models: input document, output slip, and configuration.

pub mod config;
pub mod document;
pub mod slip;

pub use config::{ParserConfig, PositionConfig, ValidationConfig};
pub use document::{OcrDocument, OcrWord};
pub use slip::{ParsingResult, WeighingSlip, WeighingSlipBuilder, Weight, WeightKind};
