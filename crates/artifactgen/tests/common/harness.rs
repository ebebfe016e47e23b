//! Test harness for isolated assembly runs.
//!
//! `TestHarness` gives each test its own temp directory tree (fixtures and
//! report output) plus a `DocumentAssembler` pointed at it, and helpers
//! for inspecting the produced archive.

#![allow(dead_code)]

use std::io::Read;
use std::path::PathBuf;

use tempfile::TempDir;

use artifactgen::report::{DocumentAssembler, GeneratedReport};

pub struct TestHarness {
    temp_dir: TempDir,
    /// Directory fixture images are written into.
    pub fixtures_dir: PathBuf,
    /// Directory reports land in.
    pub output_dir: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let fixtures_dir = temp_dir.path().join("fixtures");
        let output_dir = temp_dir.path().join("reports");
        std::fs::create_dir_all(&fixtures_dir).expect("create fixtures dir");

        Self {
            temp_dir,
            fixtures_dir,
            output_dir,
        }
    }

    pub fn assembler(&self) -> DocumentAssembler {
        DocumentAssembler::new(&self.output_dir)
    }

    /// The main document part of a generated report, as a string.
    pub fn document_xml(&self, report: &GeneratedReport) -> String {
        let file = std::fs::File::open(&report.path).expect("open report");
        let mut archive = zip::ZipArchive::new(file).expect("read archive");
        let mut part = archive
            .by_name("word/document.xml")
            .expect("document part present");
        let mut xml = String::new();
        part.read_to_string(&mut xml).expect("utf-8 document part");
        xml
    }

    /// Number of embedded media parts in a generated report.
    pub fn media_count(&self, report: &GeneratedReport) -> usize {
        let file = std::fs::File::open(&report.path).expect("open report");
        let archive = zip::ZipArchive::new(file).expect("read archive");
        archive
            .file_names()
            .filter(|name| name.starts_with("word/media/"))
            .count()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
