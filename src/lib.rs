pub mod audio;
pub mod batch;
pub mod config;
pub mod error;
pub mod live;
pub mod output;
pub mod session;
pub mod timestamp;
pub mod transcribe;

pub use audio::{ChunkFile, Microphone, SAMPLE_RATE};
pub use batch::{BatchSummary, OutputFormats, SUPPORTED_EXTENSIONS};
pub use config::{ModelSize, Settings};
pub use error::{TranscribeError, TranscribeResult};
pub use live::{LiveOptions, LiveOutcome, StopReason, DEFAULT_STOP_PHRASE};
pub use session::{ConsoleReporter, QuietReporter, Reporter, SessionOptions, TranscriptionSession};
pub use transcribe::{
    LanguageInfo, ModelOptions, ModelOutput, Segment, SegmentStream, SpeechModel, TranscriptResult,
    BEAM_SIZE,
};
