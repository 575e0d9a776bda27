//! Local Whisper engine backed by whisper.cpp via whisper-rs.

use std::os::raw::c_int;
use std::path::Path;

use tracing::info;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperState};

use crate::audio;
use crate::error::{TranscribeError, TranscribeResult};
use crate::transcribe::{LanguageInfo, ModelOptions, ModelOutput, Segment, SegmentStream, SpeechModel};

const BEAM_PATIENCE: f32 = 1.0;

/// A loaded ggml Whisper model. Loading is expensive; one instance serves
/// any number of transcribe calls.
pub struct WhisperModel {
    ctx: WhisperContext,
}

impl WhisperModel {
    pub fn load(model_path: &Path) -> TranscribeResult<Self> {
        if !model_path.is_file() {
            return Err(TranscribeError::Initialization(format!(
                "model file not found: {}",
                model_path.display()
            )));
        }
        let path = model_path.to_str().ok_or_else(|| {
            TranscribeError::Initialization(format!(
                "model path is not valid UTF-8: {}",
                model_path.display()
            ))
        })?;

        info!("Loading Whisper model from {}", path);
        let ctx = WhisperContext::new_with_params(path, WhisperContextParameters::default())
            .map_err(|e| TranscribeError::Initialization(format!("failed to load model: {}", e)))?;

        Ok(Self { ctx })
    }
}

impl SpeechModel for WhisperModel {
    fn transcribe(&self, source: &Path, options: &ModelOptions) -> TranscribeResult<ModelOutput> {
        let samples = audio::read_samples(source)?;

        let mut params = FullParams::new(SamplingStrategy::BeamSearch {
            beam_size: options.beam_size as c_int,
            patience: BEAM_PATIENCE,
        });
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_language(Some(options.language.as_deref().unwrap_or("auto")));
        if let Some(prompt) = &options.initial_prompt {
            params.set_initial_prompt(prompt);
        }

        let mut state = self
            .ctx
            .create_state()
            .map_err(|e| TranscribeError::Transcription(format!("failed to create state: {}", e)))?;
        state
            .full(params, &samples)
            .map_err(|e| TranscribeError::Transcription(format!("model run failed: {}", e)))?;

        let language = match &options.language {
            Some(code) => LanguageInfo {
                code: code.clone(),
                probability: 1.0,
            },
            None => detected_language(&state),
        };

        let count = state.full_n_segments() as usize;
        let mut segments = Vec::with_capacity(count);
        // Timestamps come back in centiseconds.
        for segment in state.as_iter() {
            let text = segment
                .to_str_lossy()
                .map_err(|e| TranscribeError::Transcription(format!("bad segment text: {}", e)))?
                .into_owned();
            segments.push(Segment {
                start: segment.start_timestamp() as f64 / 100.0,
                end: segment.end_timestamp() as f64 / 100.0,
                text,
            });
        }

        Ok(ModelOutput {
            language,
            segments: SegmentStream::from_segments(segments),
        })
    }
}

fn detected_language(state: &WhisperState) -> LanguageInfo {
    let id = state.full_lang_id();
    let code = whisper_rs::get_lang_str(id).unwrap_or("en").to_string();
    LanguageInfo {
        code,
        probability: 1.0,
    }
}
