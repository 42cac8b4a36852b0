//! Error types for the tara-core library.

use thiserror::Error;

/// Main error type for the tara library.
#[derive(Error, Debug)]
pub enum TaraError {
    /// Document loading error.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to loading OCR provider responses.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The response could not be deserialized.
    #[error("failed to parse OCR response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response contains no pages.
    #[error("OCR response has no pages")]
    NoPages,

    /// The response file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}

/// Result type for the tara library.
pub type Result<T> = std::result::Result<T, TaraError>;
