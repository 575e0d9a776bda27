//! Live microphone transcription.
//!
//! Capture runs in fixed-duration chunks. Each chunk goes through a scoped
//! temp WAV into a silent session, and non-empty text accumulates. The loop
//! ends when a chunk contains the stop phrase or the interrupt flag is
//! raised.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

use crate::audio::{ChunkFile, Microphone};
use crate::error::TranscribeResult;
use crate::session::{QuietReporter, Reporter, SessionOptions, TranscriptionSession};
use crate::transcribe::SpeechModel;

/// Capture chunk length in seconds.
pub const CHUNK_SECONDS: u64 = 5;

/// Phrase that ends a live session, matched case-insensitively.
pub const DEFAULT_STOP_PHRASE: &str = "done over";

/// Why a live session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A chunk's transcript contained the stop phrase.
    StopPhrase,
    /// The interrupt flag was raised between chunks.
    Interrupted,
}

/// Accumulated outcome of a live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveOutcome {
    /// Non-empty chunk transcripts joined with single spaces.
    pub transcript: String,
    /// Number of chunks that contributed text.
    pub chunks: usize,
    pub reason: StopReason,
}

/// Options for a live session.
#[derive(Debug, Clone)]
pub struct LiveOptions {
    pub chunk_secs: u64,
    pub stop_phrase: String,
    pub session: SessionOptions,
}

impl Default for LiveOptions {
    fn default() -> Self {
        Self {
            chunk_secs: CHUNK_SECONDS,
            stop_phrase: DEFAULT_STOP_PHRASE.to_string(),
            session: SessionOptions::default(),
        }
    }
}

/// Runs the capture-transcribe loop until the stop phrase is heard or `stop`
/// is raised.
///
/// The stop flag is only checked between iterations; a chunk in flight
/// always completes. Each chunk's temp file is removed on every exit path.
/// Microphone and chunk-write failures abort the loop; a failing
/// transcription only skips its chunk.
pub fn listen(
    model: &dyn SpeechModel,
    microphone: &dyn Microphone,
    options: &LiveOptions,
    stop: Arc<AtomicBool>,
    reporter: &dyn Reporter,
) -> TranscribeResult<LiveOutcome> {
    let session_id = Uuid::new_v4();
    let stop_phrase = options.stop_phrase.to_lowercase();
    let chunk_len = Duration::from_secs(options.chunk_secs);
    let session = TranscriptionSession::new(model, options.session.clone());

    info!(
        "Live session {} started ({}s chunks, stop phrase {:?})",
        session_id, options.chunk_secs, options.stop_phrase
    );

    let mut pieces: Vec<String> = Vec::new();
    let mut chunk_index = 0usize;
    let reason = loop {
        if stop.load(Ordering::SeqCst) {
            break StopReason::Interrupted;
        }
        chunk_index += 1;
        reporter.listening(chunk_index);

        let samples = microphone.record(chunk_len)?;
        let chunk = ChunkFile::write(&samples)?;
        match session.run(chunk.path(), &QuietReporter) {
            Ok(result) if !result.is_empty() => {
                let text = result.full_text;
                reporter.heard(&text);
                let hit = text.to_lowercase().contains(&stop_phrase);
                // Stop-phrase chunks are accumulated before the loop ends.
                pieces.push(text);
                if hit {
                    break StopReason::StopPhrase;
                }
            }
            // Silence is not an error.
            Ok(_) => {}
            Err(e) => warn!("Chunk {} failed: {}", chunk_index, e),
        }
    };

    let outcome = LiveOutcome {
        transcript: pieces.join(" "),
        chunks: pieces.len(),
        reason,
    };
    reporter.live_stopped(&outcome.reason, outcome.chunks);
    info!(
        "Live session {} stopped: {:?} after {} contributing chunk(s)",
        session_id, outcome.reason, outcome.chunks
    );
    Ok(outcome)
}
