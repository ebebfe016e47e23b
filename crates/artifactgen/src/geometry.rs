//! Screen- and image-space rectangles for block hit testing.
//!
//! Block bounding boxes come from the recognizer in source-image pixel
//! space; the overlay maps them to screen space with independent X/Y scale
//! factors, so all operations here work on plain axis-aligned rectangles.

/// A point in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle. Well-formed when `left <= right` and
/// `top <= bottom`; use [`Rect::from_corners`] to normalize arbitrary
/// corner pairs (drag gestures can go in any direction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a normalized rectangle from two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            right: a.x.max(b.x),
            bottom: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Point containment with inclusive left/top and exclusive right/bottom
    /// edges.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    /// True when the interiors of the two rectangles overlap. Touching
    /// edges do not count as an intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Scales by independent X/Y factors. Non-uniform stretch is expected:
    /// the displayed image does not aspect-lock to the source bitmap.
    pub fn scaled(&self, sx: f32, sy: f32) -> Rect {
        Rect {
            left: self.left * sx,
            top: self.top * sy,
            right: self.right * sx,
            bottom: self.bottom * sy,
        }
    }
}
