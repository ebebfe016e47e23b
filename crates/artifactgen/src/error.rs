use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Recognition error: {0}")]
    Recognize(#[from] RecognizeError),

    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Assembly error: {0}")]
    Assemble(#[from] AssembleError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Preferences error: {0}")]
    Config(#[from] ConfigError),

    #[error("No signed-in user")]
    NotSignedIn,

    #[error("Active subscription required")]
    SubscriptionRequired,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("No blocks selected")]
    EmptySelection,

    #[error("Selection session already resolved")]
    SessionResolved,

    #[error("Manual confirm is not available in test-case mode")]
    ManualConfirmUnavailable,
}

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("No steps to assemble")]
    NoSteps,

    #[error("Failed to encode step image '{path}': {reason}")]
    ImageEncode { path: PathBuf, reason: String },

    #[error("Failed to build document XML: {0}")]
    DocxWrite(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File already exists: {0}")]
    FileExists(PathBuf),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read preferences file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write preferences file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum RecognizeError {
    #[error("Failed to read image '{path}': {source}")]
    ReadImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Text recognition failed: {0}")]
    Failed(String),
}

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to create capture directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image capture failed: {0}")]
    Failed(String),
}

pub type Result<T> = std::result::Result<T, ArtifactError>;
