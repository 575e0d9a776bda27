use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

use crate::live::{CHUNK_SECONDS, DEFAULT_STOP_PHRASE};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub model: ModelSettings,
    pub live: LiveSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Directory holding ggml model files. Defaults to ~/.murmur/models.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LiveSettings {
    pub chunk_secs: u64,
    pub stop_phrase: String,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            chunk_secs: CHUNK_SECONDS,
            stop_phrase: DEFAULT_STOP_PHRASE.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a config file. An explicitly named file must
    /// exist; the default `murmur.{toml,yaml,json}` lookup is optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let name = path.unwrap_or("murmur");
        let required = path.is_some();
        let settings = config::Config::builder()
            .add_source(config::File::with_name(name).required(required))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Resolves the model directory.
    pub fn model_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.model.dir {
            return Ok(dir.clone());
        }
        let home = dirs::home_dir().context("could not find home directory")?;
        Ok(home.join(".murmur").join("models"))
    }
}

/// Whisper model sizes, named after the ggml files they load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelSize {
    Tiny,
    Base,
    Small,
    Medium,
    LargeV3,
}

impl ModelSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::LargeV3 => "large-v3",
        }
    }

    /// The ggml file name for this size, e.g. `ggml-base.bin`.
    pub fn file_name(&self) -> String {
        format!("ggml-{}.bin", self.as_str())
    }
}

impl fmt::Display for ModelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
