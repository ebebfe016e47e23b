//! Builder patterns for creating test data programmatically.
//!
//! These builders allow assembling metadata and step registries without
//! repetitive boilerplate code.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::RgbImage;

use artifactgen::extract::ExtractedMetadata;
use artifactgen::steps::StepRegistry;

/// Builder for `ExtractedMetadata` instances.
pub struct MetadataBuilder {
    test_case_id: String,
    test_case_title: String,
    preconditions: String,
}

impl MetadataBuilder {
    /// Create a new builder with realistic defaults for testing.
    pub fn new() -> Self {
        Self {
            test_case_id: "SIS-1001".to_string(),
            test_case_title: "Verify transaction completes".to_string(),
            preconditions: "Device powered on".to_string(),
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.test_case_id = id.to_string();
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.test_case_title = title.to_string();
        self
    }

    pub fn preconditions(mut self, preconditions: &str) -> Self {
        self.preconditions = preconditions.to_string();
        self
    }

    pub fn build(self) -> ExtractedMetadata {
        ExtractedMetadata {
            test_case_id: self.test_case_id,
            test_case_title: self.test_case_title,
            preconditions: self.preconditions,
        }
    }
}

impl Default for MetadataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `StepRegistry` instances backed by real image files written
/// into a fixtures directory.
pub struct RegistryBuilder {
    fixtures_dir: PathBuf,
    registry: StepRegistry,
    next_fixture: u32,
}

impl RegistryBuilder {
    pub fn new(fixtures_dir: &Path) -> Self {
        Self {
            fixtures_dir: fixtures_dir.to_path_buf(),
            registry: StepRegistry::new(),
            next_fixture: 0,
        }
    }

    /// Record a capture backed by a real decodable image of the given
    /// pixel dimensions.
    pub fn capture(mut self, step: u32, width: u32, height: u32) -> Self {
        self.next_fixture += 1;
        let path = self
            .fixtures_dir
            .join(format!("fixture_{}.png", self.next_fixture));
        RgbImage::new(width, height)
            .save(&path)
            .expect("write fixture image");
        self.registry.record_capture(step, path);
        self
    }

    /// Record a capture whose file does not exist on disk.
    pub fn missing_capture(mut self, step: u32) -> Self {
        self.next_fixture += 1;
        let path = self
            .fixtures_dir
            .join(format!("missing_{}.png", self.next_fixture));
        self.registry.record_capture(step, path);
        self
    }

    pub fn two_images(mut self, step: u32, wants: bool) -> Self {
        self.registry.set_two_images(step, wants);
        self
    }

    pub fn build(self) -> StepRegistry {
        self.registry
    }
}
