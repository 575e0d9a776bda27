use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use tracing::{error, info, warn};

use murmur::audio;
use murmur::batch::{self, OutputFormats};
use murmur::config::{ModelSize, Settings};
use murmur::error::TranscribeError;
use murmur::live::{self, LiveOptions};
use murmur::session::{ConsoleReporter, SessionOptions};
use murmur::transcribe::{self, SpeechModel};

/// Local speech-to-text for audio and video files.
#[derive(Debug, Parser)]
#[command(name = "murmur", version, about)]
struct Cli {
    /// Audio or video file to transcribe
    #[arg(short = 'f', long)]
    file: Option<PathBuf>,

    /// Directory of files to transcribe
    #[arg(short = 'd', long)]
    dir: Option<PathBuf>,

    /// Model size to load
    #[arg(long, value_enum, default_value_t = ModelSize::Base)]
    model: ModelSize,

    /// Language code, e.g. "en"; omit to auto-detect
    #[arg(long)]
    lang: Option<String>,

    /// Context hint for names and jargon
    #[arg(long)]
    prompt: Option<String>,

    /// Write a plain-text transcript next to each input
    #[arg(long)]
    txt: bool,

    /// Write a SubRip subtitle file next to each input
    #[arg(long)]
    srt: bool,

    /// Transcribe live from the microphone
    #[arg(long)]
    listen: bool,

    /// Phrase that ends a live session
    #[arg(long)]
    stop_phrase: Option<String>,

    /// Config file path
    #[arg(long)]
    config: Option<String>,
}

/// DOS-style /f and /d switches accepted as aliases.
fn normalize_args() -> Vec<String> {
    std::env::args()
        .map(|arg| match arg.to_lowercase().as_str() {
            "/f" => "-f".to_string(),
            "/d" => "-d".to_string(),
            _ => arg,
        })
        .collect()
}

fn print_banner() {
    println!("murmur v{}", env!("CARGO_PKG_VERSION"));
    println!("Started {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!();
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse_from(normalize_args());
    print_banner();

    if cli.file.is_none() && cli.dir.is_none() && !cli.listen {
        error!("No input specified. Use -f FILE, -d DIR, or --listen.");
        Cli::command().print_help().ok();
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            if e.is_fatal() {
                ExitCode::FAILURE
            } else {
                // Per-file failures were already reported; the run itself
                // still counts as completed.
                ExitCode::SUCCESS
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), TranscribeError> {
    let settings = Settings::load(cli.config.as_deref())
        .map_err(|e| TranscribeError::Initialization(format!("bad configuration: {:#}", e)))?;

    let session_options = SessionOptions {
        language: cli.lang.clone(),
        prompt: cli.prompt.clone(),
    };
    let reporter = ConsoleReporter::new();

    if cli.listen {
        let model = load_model(&settings, cli.model)?;
        let microphone = audio::open_microphone()?;

        let stop = Arc::new(AtomicBool::new(false));
        register_interrupt(&stop);

        let options = LiveOptions {
            chunk_secs: settings.live.chunk_secs,
            stop_phrase: cli
                .stop_phrase
                .unwrap_or_else(|| settings.live.stop_phrase.clone()),
            session: session_options,
        };
        println!("🎤 Listening... say {:?} to stop.", options.stop_phrase);
        let outcome = live::listen(model.as_ref(), microphone.as_ref(), &options, stop, &reporter)?;
        if !outcome.transcript.is_empty() {
            println!();
            println!("{}", outcome.transcript);
        }
        return Ok(());
    }

    let formats = OutputFormats {
        text: cli.txt,
        subtitles: cli.srt,
    };
    let model = load_model(&settings, cli.model)?;

    if let Some(file) = &cli.file {
        batch::run_file(model.as_ref(), file, &session_options, formats, &reporter)?;
    }
    if let Some(dir) = &cli.dir {
        let summary =
            batch::run_directory(model.as_ref(), dir, &session_options, formats, &reporter)?;
        info!(
            "Batch complete: {} transcribed, {} failed",
            summary.transcribed, summary.failed
        );
    }
    Ok(())
}

fn load_model(settings: &Settings, size: ModelSize) -> Result<Box<dyn SpeechModel>, TranscribeError> {
    let dir = settings
        .model_dir()
        .map_err(|e| TranscribeError::Initialization(format!("{:#}", e)))?;
    let path = dir.join(size.file_name());
    info!("Initializing {} model from {}", size, path.display());
    transcribe::load_model(&path)
}

#[cfg(unix)]
fn register_interrupt(stop: &Arc<AtomicBool>) {
    if let Err(e) = signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(stop)) {
        warn!("Could not register interrupt handler: {}", e);
    }
}

#[cfg(not(unix))]
fn register_interrupt(_stop: &Arc<AtomicBool>) {
    warn!("Interrupt handling is not available on this platform");
}
