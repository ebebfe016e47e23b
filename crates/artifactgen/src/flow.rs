//! End-to-end report workflow.
//!
//! Owns the step registry, the extracted metadata, the active selection
//! session (at most one), and the last generated report. This is the
//! explicit replacement for host-level ambient state: everything the
//! assembler consumes is carried here and passed by value or reference.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{ArtifactError, CaptureError, RecognizeError};
use crate::extract::{CaptureSession, ExtractedMetadata, ExtractionMode, ExtractionOutcome};
use crate::external::{AccessGate, CaptureOutcome, ImageCapture, TextRecognizer};
use crate::prefs::Preferences;
use crate::report::{DocumentAssembler, GeneratedReport};
use crate::steps::{capture_destination, StepRegistry};

/// Outcome of one step-capture request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureStatus {
    /// Image recorded; the step needs nothing further right now.
    Recorded,
    /// Image recorded, and the step's two-image flag asks for an immediate
    /// second capture.
    NeedsSecondImage,
    /// The user cancelled; nothing was recorded.
    Cancelled,
}

pub struct ReportWorkflow<R, C> {
    recognizer: R,
    camera: C,
    pictures_dir: PathBuf,
    assembler: DocumentAssembler,
    preferences: Preferences,
    steps: StepRegistry,
    metadata: ExtractedMetadata,
    session: Option<CaptureSession>,
    report: Option<GeneratedReport>,
}

impl<R: TextRecognizer, C: ImageCapture> ReportWorkflow<R, C> {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        recognizer: R,
        camera: C,
        pictures_dir: P,
        output_dir: Q,
        preferences: Preferences,
    ) -> Self {
        Self {
            recognizer,
            camera,
            pictures_dir: pictures_dir.as_ref().to_path_buf(),
            assembler: DocumentAssembler::new(output_dir),
            preferences,
            steps: StepRegistry::new(),
            metadata: ExtractedMetadata::default(),
            session: None,
            report: None,
        }
    }

    /// Starts a fresh run with `count` empty steps. Replaces the whole
    /// registry and forgets any previously generated report.
    pub fn generate_steps(&mut self, count: u32) {
        self.steps = StepRegistry::generate(count);
        self.report = None;
    }

    pub fn steps(&self) -> &StepRegistry {
        &self.steps
    }

    pub fn steps_mut(&mut self) -> &mut StepRegistry {
        &mut self.steps
    }

    pub fn metadata(&self) -> &ExtractedMetadata {
        &self.metadata
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.preferences
    }

    /// Requests a photo for a step and records it on success.
    pub async fn capture_step(&mut self, step: u32) -> Result<CaptureStatus, CaptureError> {
        std::fs::create_dir_all(&self.pictures_dir).map_err(|e| {
            CaptureError::CreateDirectory {
                path: self.pictures_dir.clone(),
                source: e,
            }
        })?;
        let destination = capture_destination(&self.pictures_dir, Local::now());

        match self.camera.capture(&destination).await? {
            CaptureOutcome::Cancelled => Ok(CaptureStatus::Cancelled),
            CaptureOutcome::Captured => {
                self.steps.record_capture(step, destination);
                if self.steps.needs_another_capture(step) {
                    Ok(CaptureStatus::NeedsSecondImage)
                } else {
                    Ok(CaptureStatus::Recorded)
                }
            }
        }
    }

    /// Runs recognition over a header/precondition photo and opens a
    /// selection session for it. A recognition failure aborts only this
    /// session; registry and metadata are untouched.
    pub async fn begin_extraction(
        &mut self,
        mode: ExtractionMode,
        image_path: &Path,
        display_size: (f32, f32),
    ) -> Result<&mut CaptureSession, RecognizeError> {
        let blocks = self.recognizer.recognize(image_path).await?;

        // An image that recognized but no longer decodes leaves the
        // surface inert rather than failing the session.
        let source_size = image::image_dimensions(image_path)
            .map(Some)
            .unwrap_or_default();

        let session = CaptureSession::new(mode, source_size, blocks, display_size);
        Ok(self.session.insert(session))
    }

    pub fn session_mut(&mut self) -> Option<&mut CaptureSession> {
        self.session.as_mut()
    }

    /// Commits a resolved outcome into the metadata and ends the session.
    pub fn commit_extraction(&mut self, outcome: ExtractionOutcome) {
        self.metadata.apply(outcome);
        self.session = None;
    }

    /// Dismisses the active session without committing; all of its state
    /// is discarded.
    pub fn cancel_extraction(&mut self) {
        self.session = None;
    }

    /// Generates the report, gated on identity and subscription. Only a
    /// fully successful assembly becomes shareable.
    pub fn generate(&mut self, gate: &dyn AccessGate) -> Result<&GeneratedReport, ArtifactError> {
        if gate.current_user_email().is_none() {
            return Err(ArtifactError::NotSignedIn);
        }
        if !gate.subscription_valid() {
            return Err(ArtifactError::SubscriptionRequired);
        }

        let report = self.assembler.assemble(
            &self.metadata,
            &self.steps,
            self.preferences.category_prefix,
        )?;
        Ok(self.report.insert(report))
    }

    /// The last successfully generated report, if any.
    pub fn shareable(&self) -> Option<&GeneratedReport> {
        self.report.as_ref()
    }
}
