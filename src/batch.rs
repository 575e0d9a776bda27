//! Batch orchestration over single files and directories.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{TranscribeError, TranscribeResult};
use crate::output;
use crate::session::{Reporter, SessionOptions, TranscriptionSession};
use crate::transcribe::SpeechModel;

/// Extensions accepted by directory scans, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "mp4", "wav", "m4a", "flac", "ogg", "mov", "mkv"];

/// Which sidecar files to write next to each transcribed input.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFormats {
    pub text: bool,
    pub subtitles: bool,
}

/// Outcome counts for a directory run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files whose session completed.
    pub transcribed: usize,
    /// Files whose session failed.
    pub failed: usize,
}

/// Transcribes one file and writes the requested outputs next to it.
pub fn run_file(
    model: &dyn SpeechModel,
    source: &Path,
    options: &SessionOptions,
    formats: OutputFormats,
    reporter: &dyn Reporter,
) -> TranscribeResult<()> {
    if !source.is_file() {
        return Err(TranscribeError::NotFound(source.to_path_buf()));
    }

    let session = TranscriptionSession::new(model, options.clone());
    let result = session.run(source, reporter)?;

    if result.is_empty() {
        warn!("No speech recognized in {}; skipping outputs", source.display());
        return Ok(());
    }

    if formats.text {
        let path = output::sibling_path(source, "txt");
        // Output failures don't invalidate the transcript.
        match output::write_text(&path, &result) {
            Ok(()) => reporter.output_written(&path),
            Err(e) => warn!("Could not write {}: {}", path.display(), e),
        }
    }
    if formats.subtitles {
        let path = output::sibling_path(source, "srt");
        match output::write_subtitles(&path, &result) {
            Ok(()) => reporter.output_written(&path),
            Err(e) => warn!("Could not write {}: {}", path.display(), e),
        }
    }
    Ok(())
}

/// Lists supported files directly inside `dir`, sorted by name.
/// Subdirectories are not descended into.
pub fn scan_directory(dir: &Path) -> TranscribeResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(TranscribeError::NotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let supported = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if supported {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Transcribes every supported file in `dir`. A failing file is counted and
/// reported, then the batch moves on; only missing inputs abort the run.
pub fn run_directory(
    model: &dyn SpeechModel,
    dir: &Path,
    options: &SessionOptions,
    formats: OutputFormats,
    reporter: &dyn Reporter,
) -> TranscribeResult<BatchSummary> {
    let files = scan_directory(dir)?;
    reporter.files_found(files.len());
    if files.is_empty() {
        warn!("No supported audio/video files found in {}", dir.display());
        return Ok(BatchSummary::default());
    }

    let total = files.len();
    let mut summary = BatchSummary::default();
    for (i, file) in files.iter().enumerate() {
        reporter.file_started(i + 1, total, file);
        match run_file(model, file, options, formats, reporter) {
            Ok(()) => summary.transcribed += 1,
            Err(e) => {
                reporter.file_failed(file, &e);
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
