use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::error::{TranscribeError, TranscribeResult};
use crate::session::Reporter;
use crate::transcribe::{ModelOptions, Segment, SpeechModel, TranscriptResult, BEAM_SIZE};

/// Per-session transcription options.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Force a specific language; `None` means auto-detect.
    pub language: Option<String>,
    /// Context hint forwarded to the model.
    pub prompt: Option<String>,
}

/// Drives one transcription from input file to accumulated transcript.
pub struct TranscriptionSession<'a> {
    model: &'a dyn SpeechModel,
    options: SessionOptions,
}

impl<'a> TranscriptionSession<'a> {
    pub fn new(model: &'a dyn SpeechModel, options: SessionOptions) -> Self {
        Self { model, options }
    }

    /// Transcribes `source` and accumulates the result.
    ///
    /// The model's segment stream is consumed exactly once. Each segment's
    /// text is trimmed; segments that trim to empty are dropped silently.
    /// The accumulated transcript is identical no matter which reporter
    /// observes the run.
    pub fn run(&self, source: &Path, reporter: &dyn Reporter) -> TranscribeResult<TranscriptResult> {
        if !source.exists() {
            return Err(TranscribeError::NotFound(source.to_path_buf()));
        }

        reporter.session_started(source);
        let started = Instant::now();

        let model_options = ModelOptions {
            beam_size: BEAM_SIZE,
            language: self.options.language.clone(),
            initial_prompt: self.options.prompt.clone(),
        };
        let output = self.model.transcribe(source, &model_options)?;
        reporter.language(&output.language);

        let mut accepted = Vec::new();
        for item in output.segments {
            let segment = item?;
            let text = segment.text.trim();
            if text.is_empty() {
                continue;
            }
            let segment = Segment {
                start: segment.start,
                end: segment.end,
                text: text.to_string(),
            };
            reporter.segment(&segment);
            accepted.push(segment);
        }

        let result = TranscriptResult::from_segments(accepted);
        let elapsed = started.elapsed();
        reporter.session_completed(&result, elapsed);
        debug!(
            "Session finished: {} segment(s) in {:.2}s",
            result.segments.len(),
            elapsed.as_secs_f64()
        );
        Ok(result)
    }
}
