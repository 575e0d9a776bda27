//! Microphone capture through cpal.

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::SampleFormat;
use tracing::{info, warn};

use crate::audio::{mix_to_mono, resample, Microphone, SAMPLE_RATE};
use crate::error::{TranscribeError, TranscribeResult};

/// The system default input device, opened once and reused per chunk.
pub struct CpalMicrophone {
    device: cpal::Device,
}

impl CpalMicrophone {
    pub fn new() -> TranscribeResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or_else(|| TranscribeError::Capture("no default input device".to_string()))?;
        info!(
            "Using input device: {}",
            device.name().unwrap_or_else(|_| "unknown".to_string())
        );
        Ok(Self { device })
    }
}

impl Microphone for CpalMicrophone {
    fn record(&self, duration: Duration) -> TranscribeResult<Vec<f32>> {
        let config = self
            .device
            .default_input_config()
            .map_err(|e| TranscribeError::Capture(format!("no default input config: {}", e)))?;
        let sample_rate = config.sample_rate().0;
        let channels = config.channels() as usize;
        let sample_format = config.sample_format();
        let stream_config: cpal::StreamConfig = config.into();

        let captured = Arc::new(Mutex::new(Vec::<f32>::new()));
        let err_fn = |err: cpal::StreamError| warn!("Input stream error: {}", err);

        let stream = match sample_format {
            SampleFormat::F32 => {
                let sink = Arc::clone(&captured);
                self.device.build_input_stream(
                    &stream_config,
                    move |data: &[f32], _: &cpal::InputCallbackInfo| {
                        sink.lock().unwrap().extend_from_slice(data);
                    },
                    err_fn,
                    None,
                )
            }
            SampleFormat::I16 => {
                let sink = Arc::clone(&captured);
                self.device.build_input_stream(
                    &stream_config,
                    move |data: &[i16], _: &cpal::InputCallbackInfo| {
                        sink.lock()
                            .unwrap()
                            .extend(data.iter().map(|&s| s as f32 / 32768.0));
                    },
                    err_fn,
                    None,
                )
            }
            other => {
                return Err(TranscribeError::Capture(format!(
                    "unsupported sample format: {:?}",
                    other
                )))
            }
        }
        .map_err(|e| TranscribeError::Capture(format!("failed to open input stream: {}", e)))?;

        stream
            .play()
            .map_err(|e| TranscribeError::Capture(format!("failed to start input stream: {}", e)))?;
        thread::sleep(duration);
        drop(stream);

        let raw = captured.lock().unwrap().split_off(0);
        let mono = mix_to_mono(&raw, channels);
        let mut samples = resample(&mono, sample_rate);
        // Fixed-length contract: exactly duration * 16 kHz samples.
        samples.resize((duration.as_secs_f64() * SAMPLE_RATE as f64) as usize, 0.0);
        Ok(samples)
    }
}
