//! Loads OCR provider responses into the document model.
//!
//! The provider shape (pages with lines, words, and bounding-box vertex
//! lists) stays confined to this module; the rest of the crate only sees
//! [`OcrDocument`].

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{LoadError, Result, TaraError};
use crate::models::document::{OcrDocument, OcrWord};

#[derive(Debug, Deserialize)]
struct OcrResponse {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    text: String,
    #[serde(default)]
    lines: Vec<Line>,
    #[serde(default)]
    words: Vec<ApiWord>,
    confidence: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Line {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiWord {
    #[serde(default)]
    text: String,
    confidence: Option<f64>,
    bounding_box: Option<BoundingBox>,
}

#[derive(Debug, Deserialize)]
struct BoundingBox {
    #[serde(default)]
    vertices: Vec<Vertex>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Vertex {
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
}

/// Converts provider OCR responses into [`OcrDocument`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct OcrDocumentLoader;

impl OcrDocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a response from a JSON file.
    pub fn load_from_file(&self, path: &Path) -> Result<OcrDocument> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            TaraError::Load(LoadError::Read {
                path: path.display().to_string(),
                source,
            })
        })?;
        self.load_from_str(&content)
    }

    /// Load a response from a JSON string.
    pub fn load_from_str(&self, json: &str) -> Result<OcrDocument> {
        let response: OcrResponse =
            serde_json::from_str(json).map_err(|e| TaraError::Load(LoadError::Parse(e)))?;
        convert(response).map_err(TaraError::Load)
    }
}

fn convert(response: OcrResponse) -> std::result::Result<OcrDocument, LoadError> {
    // Weighing slips are single-page documents; the provider still wraps
    // them in a page list.
    let page = response.pages.into_iter().next().ok_or(LoadError::NoPages)?;

    let lines = page.lines.into_iter().map(|line| line.text).collect();
    let words: Vec<OcrWord> = page.words.into_iter().map(convert_word).collect();

    debug!("loaded OCR document with {} words", words.len());

    Ok(OcrDocument {
        text: page.text,
        lines,
        words,
        confidence: page.confidence,
    })
}

/// Reduce the provider's vertex list to an axis-aligned top-left box.
///
/// A word without geometry gets a zero-sized box at the origin rather than
/// being dropped: the text layer can still use it.
fn convert_word(word: ApiWord) -> OcrWord {
    let vertices = word
        .bounding_box
        .map(|b| b.vertices)
        .unwrap_or_default();

    let Some(&top_left) = vertices.first() else {
        return OcrWord {
            text: word.text,
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            confidence: word.confidence,
        };
    };

    // vertices[0] is the top-left corner, vertices[2] the bottom-right.
    let bottom_right = vertices.get(2).copied().unwrap_or(top_left);

    OcrWord {
        text: word.text,
        x: top_left.x,
        y: top_left.y,
        width: bottom_right.x - top_left.x,
        height: bottom_right.y - top_left.y,
        confidence: word.confidence,
    }
}
