//! Text utilities: OCR noise normalization and keyword matching.

mod matcher;
mod normalizer;

pub use matcher::TextMatcher;
pub use normalizer::TextNormalizer;
