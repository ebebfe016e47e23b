//! Paginated report assembly.
//!
//! Layout contract (visual parity matters more than elegance here):
//! a seven-row metadata table, a page break, then per step a bold heading
//! and its images — a break before every third, fifth, ... image and a
//! trailing break isolating the step from the next heading.

mod docx;
mod filename;
mod images;

pub use docx::DocxBuilder;
pub use filename::report_file_name;
pub use images::{
    prepare_step_image, scaled_dimensions, PreparedImage, JPEG_QUALITY, MAX_SCALED_HEIGHT,
    MAX_SCALED_WIDTH,
};

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{AssembleError, StorageError};
use crate::extract::ExtractedMetadata;
use crate::prefs::CategoryPrefix;
use crate::steps::StepRegistry;

/// Header rows, in document order. ID, title, and preconditions are filled
/// from extraction; the rest stay blank for manual completion.
pub const HEADER_LABELS: [&str; 7] = [
    "TCERID",
    "Title",
    "PCC Card No",
    "Login Details",
    "Device ID",
    "Pre-requisites",
    "Comments",
];

const EMU_PER_INCH: f32 = 914_400.0;

/// Nominal pixel density used to translate scaled bitmap pixels into page
/// inches before clamping to a width budget.
const ASSUMED_DPI: f32 = 300.0;

/// Width budget for a single full-width image per page.
const SINGLE_IMAGE_WIDTH_IN: f32 = 6.0;
/// Width budget intended for two images sharing a page.
const PAIRED_IMAGE_WIDTH_IN: f32 = 3.0;

/// A finished artifact, ready to hand to an external share capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    pub path: PathBuf,
    pub mime_type: String,
}

/// On-page extent in EMU: scaled pixels become inches at the assumed
/// density, then the width is clamped to the step's budget with the height
/// following the (already aspect-correct) ratio.
fn placement_emu(width_px: u32, height_px: u32, wants_two_images: bool) -> (i64, i64) {
    let inch_w = width_px as f32 / ASSUMED_DPI;
    let inch_h = height_px as f32 / ASSUMED_DPI;

    let target_w = if wants_two_images {
        SINGLE_IMAGE_WIDTH_IN
    } else {
        PAIRED_IMAGE_WIDTH_IN
    };
    let target_h = target_w * (inch_h / inch_w);

    ((target_w * EMU_PER_INCH) as i64, (target_h * EMU_PER_INCH) as i64)
}

/// Builds report documents into an output directory.
pub struct DocumentAssembler {
    output_dir: PathBuf,
}

impl DocumentAssembler {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Assembles and writes the report for today's date.
    ///
    /// Fails up front when the registry is empty. Undecodable step images
    /// are skipped; any other failure aborts the whole run and no artifact
    /// is reported.
    pub fn assemble(
        &self,
        metadata: &ExtractedMetadata,
        steps: &StepRegistry,
        prefix: CategoryPrefix,
    ) -> Result<GeneratedReport, AssembleError> {
        let _span = tracing::info_span!("report.assemble", steps = steps.len()).entered();

        if steps.is_empty() {
            return Err(AssembleError::NoSteps);
        }

        let mut doc = DocxBuilder::new();

        doc.add_header_table(&[
            (HEADER_LABELS[0], metadata.test_case_id.as_str()),
            (HEADER_LABELS[1], metadata.test_case_title.as_str()),
            (HEADER_LABELS[2], ""),
            (HEADER_LABELS[3], ""),
            (HEADER_LABELS[4], ""),
            (HEADER_LABELS[5], metadata.preconditions.as_str()),
            (HEADER_LABELS[6], ""),
        ])?;
        doc.add_page_break()?;

        for (step, record) in steps.iter() {
            doc.add_heading(&format!("Step {}", step))?;

            for (i, path) in record.image_paths().iter().enumerate() {
                // Break cadence is positional: it counts capture slots, not
                // successfully embedded images.
                if i != 0 && i % 2 == 0 {
                    doc.add_page_break()?;
                }

                let Some(prepared) = prepare_step_image(path)? else {
                    continue;
                };
                let (emu_w, emu_h) =
                    placement_emu(prepared.width, prepared.height, record.wants_two_images());
                doc.add_image(prepared.jpeg, emu_w, emu_h)?;
            }

            doc.add_page_break()?;
        }

        let file_name = report_file_name(prefix, &metadata.test_case_id, Local::now().date_naive());
        let path = self.write_artifact(doc, &file_name)?;

        tracing::info!(path = %path.display(), "report assembled");

        Ok(GeneratedReport {
            mime_type: mime_guess::from_path(&path)
                .first_or_octet_stream()
                .to_string(),
            path,
        })
    }

    /// Creates the artifact with `create_new` so a concurrent writer can
    /// never be clobbered; name collisions get numbered variants.
    fn write_artifact(&self, doc: DocxBuilder, file_name: &str) -> Result<PathBuf, AssembleError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|e| StorageError::CreateDirectory {
            path: self.output_dir.clone(),
            source: e,
        })?;

        let (base, ext) = match file_name.rfind('.') {
            Some(dot) => (&file_name[..dot], &file_name[dot..]),
            None => (file_name, ""),
        };

        for counter in 1..=1000 {
            let candidate = if counter == 1 {
                file_name.to_string()
            } else {
                format!("{}_{}{}", base, counter, ext)
            };
            let candidate_path = self.output_dir.join(&candidate);

            match std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&candidate_path)
            {
                Ok(file) => {
                    doc.write_into(file)?;
                    return Ok(candidate_path);
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(StorageError::WriteFile {
                        path: candidate_path,
                        source: e,
                    }
                    .into());
                }
            }
        }

        Err(StorageError::FileExists(self.output_dir.join(file_name)).into())
    }
}
