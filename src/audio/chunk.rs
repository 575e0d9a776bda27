//! Scoped WAV chunk files for live capture.
//!
//! Each captured chunk is written to a temporary 16-bit PCM WAV so the
//! speech engine can read it like any other input file. The file lives
//! exactly as long as the [`ChunkFile`] value; dropping it removes the file
//! on every exit path, error or not.

use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::audio::SAMPLE_RATE;
use crate::error::TranscribeResult;

pub struct ChunkFile {
    file: NamedTempFile,
    sample_count: usize,
}

impl ChunkFile {
    /// Writes mono f32 samples as a 16-bit PCM WAV at [`SAMPLE_RATE`].
    pub fn write(samples: &[f32]) -> TranscribeResult<Self> {
        let file = tempfile::Builder::new()
            .prefix("murmur-chunk-")
            .suffix(".wav")
            .tempfile()?;

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(file.path(), spec)?;
        for &sample in samples {
            let value = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
            writer.write_sample(value)?;
        }
        writer.finalize()?;

        debug!(
            "Wrote chunk: {} ({} samples)",
            file.path().display(),
            samples.len()
        );
        Ok(Self {
            file,
            sample_count: samples.len(),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}
