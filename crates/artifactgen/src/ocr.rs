//! Tesseract-backed [`TextRecognizer`].
//!
//! Requires the system Tesseract and Leptonica libraries; enabled with the
//! `ocr` cargo feature.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use leptess::{capi, leptonica, tesseract};

use crate::block::TextBlock;
use crate::error::RecognizeError;
use crate::external::TextRecognizer;
use crate::geometry::Rect;

pub struct TesseractRecognizer {
    languages: String,
}

impl TesseractRecognizer {
    pub fn new(languages: &[String]) -> Self {
        let languages = if languages.is_empty() {
            "eng".to_string()
        } else {
            languages.join("+")
        };
        Self { languages }
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn recognize(&self, image_path: &Path) -> Result<Vec<TextBlock>, RecognizeError> {
        let _span = tracing::info_span!("ocr.recognize").entered();

        let languages = self.languages.clone();
        let path: PathBuf = image_path.to_path_buf();

        // Tesseract is CPU-bound and blocking; keep it off the caller's
        // interactive task. The result is still delivered by this await,
        // on the requesting context.
        tokio::task::spawn_blocking(move || recognize_blocks(&path, &languages))
            .await
            .map_err(|e| RecognizeError::Failed(format!("recognition task failed: {}", e)))?
    }
}

fn recognize_blocks(path: &Path, languages: &str) -> Result<Vec<TextBlock>, RecognizeError> {
    let mut api = tesseract::TessApi::new(None, languages)
        .map_err(|e| RecognizeError::Failed(format!("Failed to initialize Tesseract: {}", e)))?;

    let data = std::fs::read(path).map_err(|e| RecognizeError::ReadImage {
        path: path.to_path_buf(),
        source: e,
    })?;
    let pix = leptonica::pix_read_mem(&data)
        .map_err(|e| RecognizeError::Failed(format!("Failed to load image: {}", e)))?;
    api.set_image(&pix);

    let Some(boxes) =
        api.get_component_images(capi::TessPageIteratorLevel_RIL_TEXTLINE, true)
    else {
        return Ok(Vec::new());
    };

    let mut blocks = Vec::new();
    for (index, component) in boxes.into_iter().enumerate() {
        let region = component.get_val();
        api.set_rectangle(&component);
        let text = match api.get_utf8_text() {
            Ok(text) => text.trim().to_string(),
            Err(_) => continue,
        };
        if text.is_empty() {
            continue;
        }

        blocks.push(TextBlock::new(
            index,
            text,
            Rect::new(
                region.x as f32,
                region.y as f32,
                (region.x + region.w) as f32,
                (region.y + region.h) as f32,
            ),
        ));
    }

    Ok(blocks)
}
