use crate::block::TextBlock;
use crate::geometry::{Point, Rect};
use crate::overlay::SelectionState;

/// Result of a tap-mode pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapHit {
    /// The point landed on a block that was not yet selected.
    Added(usize),
    /// The point landed on a block that is already in the selection; the
    /// selection is unchanged.
    AlreadySelected(usize),
    /// The point landed outside every block.
    Miss,
}

/// One block outline in screen space, ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockOutline {
    pub index: usize,
    pub rect: Rect,
    /// Selected blocks get an additional translucent fill on top of the
    /// outline every block gets.
    pub selected: bool,
}

/// Everything a host view needs to redraw the overlay.
#[derive(Debug, Clone, Default)]
pub struct RenderPlan {
    pub outlines: Vec<BlockOutline>,
    /// In-progress drag rectangle, drawn as a translucent overlay on top.
    pub drag_overlay: Option<Rect>,
}

struct DragGesture {
    origin: Point,
    current: Point,
}

/// Interaction model for the image-plus-blocks overlay.
///
/// Holds the source image dimensions (not the pixels — decoding is the
/// host's concern), the recognized blocks, and the current selection.
/// Screen mapping uses independent per-axis factors `sx = Wd/Ws` and
/// `sy = Hd/Hs`; the displayed image is stretched to the view, not
/// letterboxed.
///
/// When the source image failed to decode (`source_size` is `None`) the
/// surface is inert: hit tests miss, drags select nothing, and the render
/// plan is empty.
pub struct SelectionSurface {
    display_size: (f32, f32),
    source_size: Option<(u32, u32)>,
    blocks: Vec<TextBlock>,
    selection: SelectionState,
    drag: Option<DragGesture>,
}

impl SelectionSurface {
    pub fn new(display_width: f32, display_height: f32) -> Self {
        Self {
            display_size: (display_width, display_height),
            source_size: None,
            blocks: Vec::new(),
            selection: SelectionState::new(),
            drag: None,
        }
    }

    /// Loads a new image and its recognized blocks. Replaces the selection
    /// wholesale; nothing from the previous image survives.
    pub fn set_data(&mut self, source_size: Option<(u32, u32)>, blocks: Vec<TextBlock>) {
        self.source_size = source_size;
        self.blocks = blocks;
        self.selection.clear();
        self.drag = None;
    }

    pub fn resize_display(&mut self, width: f32, height: f32) {
        self.display_size = (width, height);
    }

    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected blocks in pick order.
    pub fn selected_blocks(&self) -> Vec<&TextBlock> {
        self.selection
            .indices()
            .iter()
            .filter_map(|&i| self.blocks.iter().find(|b| b.index == i))
            .collect()
    }

    /// Per-axis screen scale factors, `None` when there is no decodable
    /// image (or it has degenerate dimensions).
    fn scale_factors(&self) -> Option<(f32, f32)> {
        let (sw, sh) = self.source_size?;
        if sw == 0 || sh == 0 {
            return None;
        }
        let (dw, dh) = self.display_size;
        Some((dw / sw as f32, dh / sh as f32))
    }

    /// Tests a screen point against every block's scaled bounding box and
    /// returns the first containing block, in recognizer order.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        let (sx, sy) = self.scale_factors()?;
        self.blocks
            .iter()
            .find(|b| b.bounds.scaled(sx, sy).contains(point))
            .map(|b| b.index)
    }

    /// Tap-mode pointer-down: picks the block under the point, if any.
    /// Re-picking a selected block is rejected, never duplicated.
    pub fn tap(&mut self, point: Point) -> TapHit {
        match self.hit_test(point) {
            None => TapHit::Miss,
            Some(index) => {
                if self.selection.insert(index) {
                    TapHit::Added(index)
                } else {
                    TapHit::AlreadySelected(index)
                }
            }
        }
    }

    /// Drag-mode pointer-down.
    pub fn begin_drag(&mut self, point: Point) {
        self.drag = Some(DragGesture {
            origin: point,
            current: point,
        });
    }

    /// Drag-mode pointer-move. No-op unless a drag is in progress.
    pub fn drag_to(&mut self, point: Point) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current = point;
        }
    }

    /// Drag-mode pointer-up. The selection is recomputed from scratch as
    /// every block whose scaled box intersects the normalized drag
    /// rectangle; the previous selection is discarded.
    pub fn end_drag(&mut self, point: Point) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let rect = Rect::from_corners(drag.origin, point);
        self.apply_drag_rect(rect);
    }

    fn apply_drag_rect(&mut self, rect: Rect) {
        let Some((sx, sy)) = self.scale_factors() else {
            self.selection.clear();
            return;
        };
        let hits = self
            .blocks
            .iter()
            .filter(|b| b.bounds.scaled(sx, sy).intersects(&rect))
            .map(|b| b.index)
            .collect();
        self.selection.replace(hits);
    }

    /// Current in-progress drag rectangle, normalized.
    pub fn drag_rect(&self) -> Option<Rect> {
        self.drag
            .as_ref()
            .map(|d| Rect::from_corners(d.origin, d.current))
    }

    /// Snapshot of what the host should draw: every block outline (with a
    /// selected flag) plus the live drag rectangle.
    pub fn render_plan(&self) -> RenderPlan {
        let Some((sx, sy)) = self.scale_factors() else {
            return RenderPlan::default();
        };
        RenderPlan {
            outlines: self
                .blocks
                .iter()
                .map(|b| BlockOutline {
                    index: b.index,
                    rect: b.bounds.scaled(sx, sy),
                    selected: self.selection.contains(b.index),
                })
                .collect(),
            drag_overlay: self.drag_rect(),
        }
    }
}
