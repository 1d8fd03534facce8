use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipsetError {
    #[error("Download failed for {url}: HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Download failed for {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    #[error("Source video not found: {path}")]
    MissingSource { path: PathBuf },

    #[error("ffmpeg failed for {path}: {reason}")]
    FfmpegFailed { path: PathBuf, reason: String },

    #[error("Decoded stream from {path} is not a whole number of frames: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Frame count mismatch for {path}: expected {expected}, got {actual}")]
    FrameCountMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("Clip {name} was already emitted in this run")]
    DuplicateClip { name: String },

    #[error("Invalid manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl ClipsetError {
    /// Whether a runner may skip the offending source instead of aborting.
    pub fn is_frame_count_mismatch(&self) -> bool {
        matches!(self, ClipsetError::FrameCountMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, ClipsetError>;
