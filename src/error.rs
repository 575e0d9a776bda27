use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type TranscribeResult<T> = Result<T, TranscribeError>;

/// Everything that can go wrong while transcribing.
///
/// Only `Initialization` aborts a run. All other variants are caught and
/// logged at the orchestration boundary, and the batch or live loop moves
/// on.
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// Input path does not exist or is not a regular file.
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The model failed while processing one file or chunk.
    #[error("transcription failed: {0}")]
    Transcription(String),

    /// The speech engine could not be set up.
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// Microphone capture failed.
    #[error("audio capture failed: {0}")]
    Capture(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user aborted the run.
    #[error("interrupted")]
    Interrupted,
}

impl TranscribeError {
    /// True for failures that should terminate the whole process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TranscribeError::Initialization(_))
    }
}

impl From<hound::Error> for TranscribeError {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => TranscribeError::Io(e),
            other => TranscribeError::Capture(other.to_string()),
        }
    }
}
