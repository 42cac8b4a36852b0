//! OCR document model handed to the parsing pipeline.
//!
//! The document is read-only input: the loader produces it once and the
//! pipeline never mutates it.

use serde::{Deserialize, Serialize};

/// A recognized word with its bounding box.
///
/// Coordinates use a top-left-origin pixel system (y grows downward).
/// The box is axis-aligned; a word without geometry carries a zero-sized
/// box at the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrWord {
    /// Recognized text content.
    pub text: String,

    /// Top-left x coordinate in pixels.
    pub x: i32,

    /// Top-left y coordinate in pixels.
    pub y: i32,

    /// Box width in pixels.
    pub width: i32,

    /// Box height in pixels.
    pub height: i32,

    /// Recognition confidence score (0.0 - 1.0), when the provider reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl OcrWord {
    /// The x coordinate just past the right edge of the box.
    pub fn right_edge(&self) -> i32 {
        self.x + self.width
    }
}

/// A single OCR'd document (one weighing slip).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OcrDocument {
    /// Full recognized text.
    pub text: String,

    /// Per-line text, in reading order.
    pub lines: Vec<String>,

    /// Recognized words with coordinates, in provider order.
    pub words: Vec<OcrWord>,

    /// Overall recognition confidence (0.0 - 1.0), when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl OcrDocument {
    /// True when the document carries no usable content at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.lines.is_empty() && self.words.is_empty()
    }

    /// Build a document from line text only (no word geometry).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            text: lines.join("\n"),
            lines,
            words: Vec::new(),
            confidence: None,
        }
    }
}
