//! Audio ingestion: file decoding and microphone capture.
//!
//! Everything downstream of this module works on mono f32 samples at
//! [`SAMPLE_RATE`]; rate and channel conversion happen here at the edges.

pub mod chunk;
pub mod decode;

#[cfg(feature = "microphone")]
pub mod capture;

pub use chunk::ChunkFile;
pub use decode::read_samples;

use std::time::Duration;

use crate::error::TranscribeResult;

/// Sample rate expected by the speech model, in Hz.
pub const SAMPLE_RATE: u32 = 16_000;

/// A microphone capture source.
pub trait Microphone {
    /// Records for the full duration, blocking the caller, and returns mono
    /// samples at [`SAMPLE_RATE`] in [-1.0, 1.0].
    fn record(&self, duration: Duration) -> TranscribeResult<Vec<f32>>;
}

/// Opens the system default input device.
pub fn open_microphone() -> TranscribeResult<Box<dyn Microphone>> {
    #[cfg(feature = "microphone")]
    {
        Ok(Box::new(capture::CpalMicrophone::new()?))
    }

    #[cfg(not(feature = "microphone"))]
    {
        Err(crate::error::TranscribeError::Initialization(
            "no microphone backend compiled in; rebuild with --features microphone".to_string(),
        ))
    }
}

/// Averages interleaved channels down to mono. Mono input passes through.
pub fn mix_to_mono(samples: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }
    samples
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Nearest-sample resampling to [`SAMPLE_RATE`]. Identity when the input is
/// already at the target rate.
pub fn resample(samples: &[f32], from_rate: u32) -> Vec<f32> {
    if from_rate == SAMPLE_RATE || samples.is_empty() {
        return samples.to_vec();
    }
    let out_len = (samples.len() as u64 * SAMPLE_RATE as u64 / from_rate as u64) as usize;
    let mut out = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let src = (i as u64 * from_rate as u64 / SAMPLE_RATE as u64) as usize;
        if src >= samples.len() {
            break;
        }
        out.push(samples[src]);
    }
    out
}
