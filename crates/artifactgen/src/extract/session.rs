use crate::block::TextBlock;
use crate::error::ExtractError;
use crate::extract::pattern::{extract_test_case_id, flatten_lines};
use crate::geometry::Point;
use crate::overlay::{SelectionSurface, TapHit};

/// What a selection round is extracting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Tap mode: two picks, ID then title; resolves automatically on the
    /// second pick.
    TestCase,
    /// Drag mode: any number of blocks, committed manually.
    Precondition,
}

/// The single committed result of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    TestCase { id: String, title: String },
    Precondition { text: String },
}

/// Host-visible feedback for a pointer event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionFeedback {
    /// Nothing to report (drag in progress, ignored event).
    Idle,
    /// Tap landed outside every block.
    TapMiss,
    /// One block picked, one more needed.
    NeedOneMore,
    /// Tap landed on an already-selected block; nothing changed.
    AlreadySelected,
    /// The session resolved; the surface should be dismissed.
    Resolved(ExtractionOutcome),
    /// The session already resolved earlier; the event was ignored.
    SessionComplete,
}

/// One interactive round of image display, block selection, and commit.
///
/// Owns its [`SelectionSurface`] (and thereby the selection state) for its
/// whole lifetime. Dropping an unresolved session cancels it with no side
/// effects; committing hands exactly one [`ExtractionOutcome`] to the
/// caller.
pub struct CaptureSession {
    mode: ExtractionMode,
    surface: SelectionSurface,
    resolved: bool,
}

impl CaptureSession {
    pub fn new(
        mode: ExtractionMode,
        source_size: Option<(u32, u32)>,
        blocks: Vec<TextBlock>,
        display_size: (f32, f32),
    ) -> Self {
        let mut surface = SelectionSurface::new(display_size.0, display_size.1);
        surface.set_data(source_size, blocks);
        Self {
            mode,
            surface,
            resolved: false,
        }
    }

    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// The owned surface, for render plans and selection inspection.
    pub fn surface(&self) -> &SelectionSurface {
        &self.surface
    }

    /// Pointer-down, dispatched by mode: a tap pick in test-case mode, the
    /// start of a drag rectangle in precondition mode.
    pub fn pointer_down(&mut self, point: Point) -> SessionFeedback {
        if self.resolved {
            return SessionFeedback::SessionComplete;
        }
        match self.mode {
            ExtractionMode::TestCase => match self.surface.tap(point) {
                TapHit::Miss => SessionFeedback::TapMiss,
                TapHit::AlreadySelected(_) => SessionFeedback::AlreadySelected,
                TapHit::Added(_) => {
                    if self.surface.selection().len() == 2 {
                        SessionFeedback::Resolved(self.resolve_test_case())
                    } else {
                        SessionFeedback::NeedOneMore
                    }
                }
            },
            ExtractionMode::Precondition => {
                self.surface.begin_drag(point);
                SessionFeedback::Idle
            }
        }
    }

    pub fn pointer_move(&mut self, point: Point) {
        if !self.resolved && self.mode == ExtractionMode::Precondition {
            self.surface.drag_to(point);
        }
    }

    pub fn pointer_up(&mut self, point: Point) {
        if !self.resolved && self.mode == ExtractionMode::Precondition {
            self.surface.end_drag(point);
        }
    }

    /// Manual commit for precondition mode. Rejects an empty selection
    /// without changing it; the session stays open for more picks.
    pub fn confirm(&mut self) -> Result<ExtractionOutcome, ExtractError> {
        if self.mode != ExtractionMode::Precondition {
            return Err(ExtractError::ManualConfirmUnavailable);
        }
        if self.resolved {
            return Err(ExtractError::SessionResolved);
        }
        let selected = self.surface.selected_blocks();
        if selected.is_empty() {
            return Err(ExtractError::EmptySelection);
        }

        let combined = selected
            .iter()
            .map(|b| flatten_lines(&b.text))
            .collect::<Vec<_>>()
            .join("\n");

        self.resolved = true;
        Ok(ExtractionOutcome::Precondition {
            text: combined.trim().to_string(),
        })
    }

    /// Empties the selection without ending the session.
    pub fn clear(&mut self) {
        if !self.resolved {
            self.surface.clear_selection();
        }
    }

    fn resolve_test_case(&mut self) -> ExtractionOutcome {
        let selected = self.surface.selected_blocks();
        // First pick carries the ID, second the title; resolve_test_case is
        // only reached with exactly two blocks selected.
        let id = selected
            .first()
            .map(|b| extract_test_case_id(&b.text))
            .unwrap_or_else(|| extract_test_case_id(""));
        let title = selected
            .get(1)
            .map(|b| flatten_lines(&b.text))
            .unwrap_or_default();

        self.resolved = true;
        ExtractionOutcome::TestCase { id, title }
    }
}
