use crate::geometry::Rect;

/// A recognized text region: the text content plus its bounding box in
/// source-image pixel space.
///
/// Blocks are immutable once produced by the recognizer and are discarded
/// when a new image is processed. `index` is the block's position in the
/// recognizer's output list and serves as its identity — selection state
/// tracks indices, never block values, so two blocks with identical text
/// and geometry are still distinct picks.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub index: usize,
    pub text: String,
    pub bounds: Rect,
}

impl TextBlock {
    pub fn new(index: usize, text: impl Into<String>, bounds: Rect) -> Self {
        Self {
            index,
            text: text.into(),
            bounds,
        }
    }
}
