//! Output strategies for session and batch progress.
//!
//! Console rendering is injected rather than ambient, so the accumulation
//! logic runs identically under interactive output and under silence.

use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::TranscribeError;
use crate::live::StopReason;
use crate::timestamp;
use crate::transcribe::{LanguageInfo, Segment, TranscriptResult};

/// Progress callbacks. Every method has a no-op default, so implementations
/// pick the events they care about.
pub trait Reporter {
    fn session_started(&self, _source: &Path) {}
    fn language(&self, _info: &LanguageInfo) {}
    fn segment(&self, _segment: &Segment) {}
    fn session_completed(&self, _result: &TranscriptResult, _elapsed: Duration) {}
    fn files_found(&self, _count: usize) {}
    fn file_started(&self, _index: usize, _total: usize, _source: &Path) {}
    fn file_failed(&self, _source: &Path, _error: &TranscribeError) {}
    fn output_written(&self, _path: &Path) {}
    fn listening(&self, _chunk: usize) {}
    fn heard(&self, _text: &str) {}
    fn live_stopped(&self, _reason: &StopReason, _chunks: usize) {}
}

/// Suppresses all progress output. Accumulation behaves identically.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuietReporter;

impl Reporter for QuietReporter {}

/// Interactive console output with a spinner while segments stream in.
pub struct ConsoleReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn print(&self, line: String) {
        let spinner = self.spinner.lock().unwrap();
        match spinner.as_ref() {
            // Printing through the bar keeps the spinner on the bottom line.
            Some(pb) => pb.println(line),
            None => println!("{}", line),
        }
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn session_started(&self, source: &Path) {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());
        println!("Transcribing: {}", name);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("Processing segments...");
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn language(&self, info: &LanguageInfo) {
        self.print(format!(
            "Language: '{}' (probability {:.2})",
            info.code, info.probability
        ));
    }

    fn segment(&self, segment: &Segment) {
        self.print(format!(
            "[{} -> {}] {}",
            timestamp::format_display(segment.start),
            timestamp::format_display(segment.end),
            segment.text
        ));
    }

    fn session_completed(&self, result: &TranscriptResult, elapsed: Duration) {
        self.clear_spinner();
        if result.is_empty() {
            println!("No speech recognized ({:.2}s)", elapsed.as_secs_f64());
        } else {
            println!("Transcription completed in {:.2}s", elapsed.as_secs_f64());
        }
    }

    fn files_found(&self, count: usize) {
        println!("Found {} file(s) to transcribe", count);
    }

    fn file_started(&self, index: usize, total: usize, source: &Path) {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());
        println!();
        println!("--- File {}/{}: {} ---", index, total, name);
    }

    fn file_failed(&self, source: &Path, error: &TranscribeError) {
        self.clear_spinner();
        tracing::error!("{}: {}", source.display(), error);
    }

    fn output_written(&self, path: &Path) {
        println!("Saved {}", path.display());
    }

    fn listening(&self, chunk: usize) {
        println!("🎤 Listening (chunk {})...", chunk);
    }

    fn heard(&self, text: &str) {
        println!("🎤 {}", text);
    }

    fn live_stopped(&self, reason: &StopReason, chunks: usize) {
        match reason {
            StopReason::StopPhrase => {
                println!("Stop phrase detected. Captured {} chunk(s).", chunks);
            }
            StopReason::Interrupted => {
                tracing::warn!("Interrupted after {} chunk(s)", chunks);
            }
        }
    }
}
