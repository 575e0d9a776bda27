//! Transcription sessions and their output strategies.
//!
//! A session drives one model call end to end and streams segments through
//! the accumulation rules. Progress goes to a [`Reporter`], which decides
//! what the user sees; the transcript is the same either way.

pub mod reporter;
mod session;

pub use reporter::{ConsoleReporter, QuietReporter, Reporter};
pub use session::{SessionOptions, TranscriptionSession};
