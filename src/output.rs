//! Transcript serialization to plain text and SubRip subtitles.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::TranscribeResult;
use crate::timestamp;
use crate::transcribe::TranscriptResult;

/// Output path next to the source, with the extension swapped.
pub fn sibling_path(source: &Path, extension: &str) -> PathBuf {
    source.with_extension(extension)
}

/// Writes the full transcript text with a trailing newline, overwriting any
/// existing file.
pub fn write_text(path: &Path, result: &TranscriptResult) -> TranscribeResult<()> {
    fs::write(path, format!("{}\n", result.full_text))?;
    Ok(())
}

/// Writes the transcript as a SubRip document, overwriting any existing file.
pub fn write_subtitles(path: &Path, result: &TranscriptResult) -> TranscribeResult<()> {
    let mut file = File::create(path)?;
    file.write_all(subtitle_document(result).as_bytes())?;
    Ok(())
}

/// Renders SubRip blocks: a 1-based index, a timing line, the text, and a
/// blank separator. Segments that trim to empty get no block and no index
/// gap. Lines end with LF.
pub fn subtitle_document(result: &TranscriptResult) -> String {
    let mut document = String::new();
    let mut index = 1;
    for segment in &result.segments {
        let text = segment.text.trim();
        if text.is_empty() {
            continue;
        }
        document.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index,
            timestamp::format_subtitle(segment.start),
            timestamp::format_subtitle(segment.end),
            text
        ));
        index += 1;
    }
    document
}
