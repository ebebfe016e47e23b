//! Seams for external collaborators.
//!
//! Recognition, photo capture, and the identity/subscription gate are
//! provided by the host application; the core only depends on these
//! traits. Each async method is a single-shot request whose completion is
//! awaited on the caller's own task — no detached callbacks mutate core
//! state.

use std::path::Path;

use async_trait::async_trait;

use crate::block::TextBlock;
use crate::error::{CaptureError, RecognizeError};

/// Text recognition engine producing blocks with bounding boxes.
///
/// Block order is recognizer-defined; the core never re-sorts it, only
/// tags each block with its position as the identity index.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image_path: &Path) -> Result<Vec<TextBlock>, RecognizeError>;
}

/// Result of one photo capture request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// A readable image file now exists at the requested destination.
    Captured,
    /// The user backed out; no file was produced.
    Cancelled,
}

/// Camera capability: writes a captured photo to the given destination.
#[async_trait]
pub trait ImageCapture: Send + Sync {
    async fn capture(&self, destination: &Path) -> Result<CaptureOutcome, CaptureError>;
}

/// Identity and subscription gate. Report generation is refused unless a
/// user is signed in with a valid subscription.
pub trait AccessGate: Send + Sync {
    fn current_user_email(&self) -> Option<String>;
    fn subscription_valid(&self) -> bool;
}
