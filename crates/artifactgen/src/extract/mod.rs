//! Mode-aware extraction of test-case metadata from block selections.

mod pattern;
mod session;

pub use pattern::{extract_test_case_id, flatten_lines, UNKNOWN_TEST_CASE_ID};
pub use session::{CaptureSession, ExtractionMode, ExtractionOutcome, SessionFeedback};

/// Header fields extracted from OCR selections, consumed by the document
/// assembler. Fields default to empty strings and are assigned once per
/// committed session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub test_case_id: String,
    pub test_case_title: String,
    pub preconditions: String,
}

impl ExtractedMetadata {
    /// Applies a committed extraction outcome. Each outcome variant writes
    /// only its own fields.
    pub fn apply(&mut self, outcome: ExtractionOutcome) {
        match outcome {
            ExtractionOutcome::TestCase { id, title } => {
                self.test_case_id = id;
                self.test_case_title = title;
            }
            ExtractionOutcome::Precondition { text } => {
                self.preconditions = text;
            }
        }
    }
}
