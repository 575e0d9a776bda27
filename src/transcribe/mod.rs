//! Transcript data model and the speech-model contract.
//!
//! The model is an external collaborator: given an audio file and options it
//! produces an ordered sequence of timed text segments plus detected-language
//! metadata. Engines implement [`SpeechModel`]; the rest of the crate depends
//! only on that trait, so tests can substitute scripted models.

#[cfg(feature = "whisper")]
pub mod whisper;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TranscribeResult;

/// Beam-search width forwarded to the model on every call. Fixed for
/// reproducible output; not a user option.
pub const BEAM_SIZE: u32 = 5;

/// A timed span of recognized speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start offset in seconds.
    pub start: f64,
    /// End offset in seconds.
    pub end: f64,
    /// Recognized text.
    pub text: String,
}

/// Detected-language metadata. Advisory only; surfaced in interactive runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// ISO 639-1 code, e.g. "en".
    pub code: String,
    /// Detection confidence in [0, 1].
    pub probability: f32,
}

/// Options forwarded to the model for a single call.
#[derive(Debug, Clone)]
pub struct ModelOptions {
    pub beam_size: u32,
    /// Force a specific language; `None` means auto-detect.
    pub language: Option<String>,
    /// Context hint for names and jargon.
    pub initial_prompt: Option<String>,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            beam_size: BEAM_SIZE,
            language: None,
            initial_prompt: None,
        }
    }
}

/// A finite, consume-once sequence of segments from one model call.
///
/// Driving the iterator pulls segments in order. Ownership enforces single
/// consumption: once a session has driven the stream there is no way to
/// restart or re-drive it.
pub struct SegmentStream {
    inner: Box<dyn Iterator<Item = TranscribeResult<Segment>>>,
}

impl SegmentStream {
    pub fn new<I>(segments: I) -> Self
    where
        I: Iterator<Item = TranscribeResult<Segment>> + 'static,
    {
        Self {
            inner: Box::new(segments),
        }
    }

    /// Wraps an already-materialized segment list.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self::new(segments.into_iter().map(Ok))
    }
}

impl Iterator for SegmentStream {
    type Item = TranscribeResult<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Everything a single model call produces.
pub struct ModelOutput {
    pub language: LanguageInfo,
    pub segments: SegmentStream,
}

/// The wrapped speech-to-text capability.
pub trait SpeechModel {
    /// Transcribes one audio file. The returned stream must be driven to
    /// completion exactly once; errors during the run surface either here or
    /// as an `Err` item in the stream.
    fn transcribe(&self, source: &Path, options: &ModelOptions) -> TranscribeResult<ModelOutput>;
}

/// An accumulated transcription outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Accepted segments' text joined with single spaces, in segment order.
    pub full_text: String,
    /// Accepted segments, trimmed and non-empty, in model order.
    pub segments: Vec<Segment>,
}

impl TranscriptResult {
    /// Builds a result from segments that are already trimmed and non-empty.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let full_text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self { full_text, segments }
    }

    pub fn empty() -> Self {
        Self {
            full_text: String::new(),
            segments: Vec::new(),
        }
    }

    /// True when no usable speech was recognized.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Creates the best available speech engine for the given model file.
///
/// With the `whisper` feature this loads a local ggml model; without it
/// there is no engine to run and initialization fails up front.
pub fn load_model(model_path: &Path) -> TranscribeResult<Box<dyn SpeechModel>> {
    #[cfg(feature = "whisper")]
    {
        Ok(Box::new(whisper::WhisperModel::load(model_path)?))
    }

    #[cfg(not(feature = "whisper"))]
    {
        Err(crate::error::TranscribeError::Initialization(format!(
            "no speech engine compiled in; rebuild with --features whisper (model: {})",
            model_path.display()
        )))
    }
}
