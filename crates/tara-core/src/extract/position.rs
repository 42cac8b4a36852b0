//! Geometric predicates over word bounding boxes.

use crate::models::config::ParserConfig;
use crate::models::document::OcrWord;

/// Label/value geometry over OCR word boxes.
///
/// Boxes are top-left-origin with y growing downward; all predicates work
/// on that convention.
#[derive(Debug, Clone, Copy)]
pub struct PositionHelper {
    y_tolerance: i32,
    x_min_offset: i32,
}

impl PositionHelper {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            y_tolerance: config.position.y_tolerance,
            x_min_offset: config.position.x_min_offset,
        }
    }

    /// True when the two words sit on the same printed row.
    pub fn same_row(&self, a: &OcrWord, b: &OcrWord) -> bool {
        (a.y - b.y).abs() <= self.y_tolerance
    }

    /// True when `candidate` starts clearly to the right of `label`.
    pub fn right_of(&self, label: &OcrWord, candidate: &OcrWord) -> bool {
        candidate.x >= label.right_edge() + self.x_min_offset
    }

    /// The leftmost word on the label's row that is right of the label.
    ///
    /// Greedy O(n) scan; ties on x keep the first word in input order.
    pub fn nearest_right<'a>(&self, label: &OcrWord, words: &'a [OcrWord]) -> Option<&'a OcrWord> {
        let mut nearest: Option<&OcrWord> = None;

        for word in words {
            if !self.same_row(label, word) || !self.right_of(label, word) {
                continue;
            }
            match nearest {
                Some(current) if word.x >= current.x => {}
                _ => nearest = Some(word),
            }
        }

        nearest
    }
}
