pub mod block;
pub mod error;
pub mod external;
pub mod extract;
pub mod flow;
pub mod geometry;
#[cfg(feature = "ocr")]
pub mod ocr;
pub mod overlay;
pub mod prefs;
pub mod report;
pub mod steps;

pub use block::TextBlock;
pub use error::{
    ArtifactError, AssembleError, CaptureError, ConfigError, ExtractError, RecognizeError, Result,
    StorageError,
};
pub use external::{AccessGate, CaptureOutcome, ImageCapture, TextRecognizer};
pub use extract::{
    CaptureSession, ExtractedMetadata, ExtractionMode, ExtractionOutcome, SessionFeedback,
};
pub use flow::{CaptureStatus, ReportWorkflow};
pub use geometry::{Point, Rect};
#[cfg(feature = "ocr")]
pub use ocr::TesseractRecognizer;
pub use overlay::{RenderPlan, SelectionState, SelectionSurface};
pub use prefs::{CategoryPrefix, Preferences};
pub use report::{DocumentAssembler, GeneratedReport};
pub use steps::{StepRecord, StepRegistry};
