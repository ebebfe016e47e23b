//! Per-step accumulation of captured evidence images.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Captured evidence for one test step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepRecord {
    image_paths: Vec<PathBuf>,
    wants_two_images: bool,
}

impl StepRecord {
    /// Capture paths in capture order.
    pub fn image_paths(&self) -> &[PathBuf] {
        &self.image_paths
    }

    /// Layout preference: `true` places one full-width image per page,
    /// `false` the narrower paired width. Advisory only — it never caps
    /// how many images a step can accumulate.
    pub fn wants_two_images(&self) -> bool {
        self.wants_two_images
    }
}

/// Ordered registry of step records, keyed by step number (1-based).
///
/// A single owned value passed explicitly into the document assembler.
/// Iteration is always ascending by step number regardless of the order
/// captures arrived in. There is no removal operation; restarting a run
/// replaces the whole registry via [`StepRegistry::generate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepRegistry {
    steps: BTreeMap<u32, StepRecord>,
}

impl StepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh registry with empty records for steps `1..=count`.
    pub fn generate(count: u32) -> Self {
        Self {
            steps: (1..=count).map(|n| (n, StepRecord::default())).collect(),
        }
    }

    /// Records a successful capture for a step. The first capture for an
    /// unknown step creates its record.
    pub fn record_capture(&mut self, step: u32, path: PathBuf) {
        self.steps.entry(step).or_default().image_paths.push(path);
    }

    /// Toggles the per-step layout flag; may be flipped at any time before
    /// document generation.
    pub fn set_two_images(&mut self, step: u32, wants_two_images: bool) {
        self.steps.entry(step).or_default().wants_two_images = wants_two_images;
    }

    pub fn get(&self, step: u32) -> Option<&StepRecord> {
        self.steps.get(&step)
    }

    /// Number of images captured for a step so far.
    pub fn captured_count(&self, step: u32) -> usize {
        self.steps.get(&step).map_or(0, |r| r.image_paths.len())
    }

    /// True when the step's two-image flag is set and exactly one image has
    /// been recorded — the capture flow should immediately prompt for the
    /// second.
    pub fn needs_another_capture(&self, step: u32) -> bool {
        self.steps
            .get(&step)
            .is_some_and(|r| r.wants_two_images && r.image_paths.len() == 1)
    }

    /// Steps in ascending step-number order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &StepRecord)> {
        self.steps.iter().map(|(&n, r)| (n, r))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Destination path for a new capture: `IMG_<yyyyMMdd_HHmmss>.jpg` under
/// the pictures directory. The timestamp only has second resolution, so a
/// taken name gets a numbered suffix — two-image steps prompt for the
/// second capture immediately, which regularly lands in the same second.
pub fn capture_destination(pictures_dir: &Path, now: DateTime<Local>) -> PathBuf {
    let stamp = now.format("%Y%m%d_%H%M%S");
    let mut candidate = pictures_dir.join(format!("IMG_{}.jpg", stamp));
    let mut counter = 1u32;
    while candidate.exists() {
        counter += 1;
        candidate = pictures_dir.join(format!("IMG_{}_{}.jpg", stamp, counter));
    }
    candidate
}
