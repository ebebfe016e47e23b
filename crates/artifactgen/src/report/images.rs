//! Evidence image preparation: aspect-fit downscale and JPEG re-encode.

use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;

use crate::error::AssembleError;

/// Resize bounds chosen to balance clarity against artifact size.
pub const MAX_SCALED_WIDTH: u32 = 2072;
pub const MAX_SCALED_HEIGHT: u32 = 3096;

/// Re-encode quality keeping a typical multi-step report under the ~10 MB
/// soft budget. There is no retry-at-lower-quality loop.
pub const JPEG_QUALITY: u8 = 40;

/// A step image scaled and re-encoded, ready to embed.
pub struct PreparedImage {
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Aspect-preserving fit: landscape images fit the max width and derive
/// their height from the ratio; portrait and square images fit the max
/// height. Rounded to the nearest pixel.
pub fn scaled_dimensions(orig_w: u32, orig_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let aspect = orig_w as f32 / orig_h as f32;
    if orig_w > orig_h {
        (max_w, (max_w as f32 / aspect).round() as u32)
    } else {
        ((max_h as f32 * aspect).round() as u32, max_h)
    }
}

/// Loads, downscales, and re-encodes one step image.
///
/// A missing or undecodable file is not fatal: it is logged and reported
/// as `Ok(None)` so the step simply contributes less page content. Only
/// encoding failures abort the assembly run.
pub fn prepare_step_image(path: &Path) -> Result<Option<PreparedImage>, AssembleError> {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable step image");
            return Ok(None);
        }
    };

    let original = match image::load_from_memory(&data) {
        Ok(img) => img,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping undecodable step image");
            return Ok(None);
        }
    };

    let (orig_w, orig_h) = original.dimensions();
    let (width, height) =
        scaled_dimensions(orig_w, orig_h, MAX_SCALED_WIDTH, MAX_SCALED_HEIGHT);

    // Triangle is the bilinear filter; the smoothing matters for text
    // legibility in screenshots.
    let scaled = original
        .resize_exact(width, height, FilterType::Triangle)
        .to_rgb8();

    let mut jpeg = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    encoder
        .encode_image(&scaled)
        .map_err(|e| AssembleError::ImageEncode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(Some(PreparedImage {
        jpeg,
        width,
        height,
    }))
}
