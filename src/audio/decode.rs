//! Media decoding through Symphonia.
//!
//! Accepts anything Symphonia can probe (WAV, MP3, MP4/M4A, FLAC, OGG, and
//! the audio tracks of MOV/MKV containers) and produces mono samples at the
//! model rate.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use tracing::debug;

use crate::audio::{mix_to_mono, resample, SAMPLE_RATE};
use crate::error::{TranscribeError, TranscribeResult};

/// Decodes an audio or video file into mono f32 samples at [`SAMPLE_RATE`].
pub fn read_samples(source: &Path) -> TranscribeResult<Vec<f32>> {
    let file = File::open(source)
        .map_err(|e| TranscribeError::Transcription(format!("cannot open {}: {}", source.display(), e)))?;

    let mut hint = Hint::new();
    if let Some(ext) = source.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let mss = MediaSourceStream::new(Box::new(file), Default::default());
    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| {
            TranscribeError::Transcription(format!(
                "unrecognized media format in {}: {}",
                source.display(),
                e
            ))
        })?;

    let mut format = probed.format;
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| {
            TranscribeError::Transcription(format!("no decodable audio track in {}", source.display()))
        })?;
    let track_id = track.id;

    let sample_rate = track.codec_params.sample_rate.ok_or_else(|| {
        TranscribeError::Transcription(format!("unknown sample rate in {}", source.display()))
    })?;
    let channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| TranscribeError::Transcription(format!("unsupported codec: {}", e)))?;

    let mut interleaved: Vec<f32> = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // Symphonia signals end of stream as an IO error.
            Err(SymphoniaError::IoError(_)) => break,
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(TranscribeError::Transcription(format!(
                    "packet read failed: {}",
                    e
                )))
            }
        };
        if packet.track_id() != track_id {
            continue;
        }
        match decoder.decode(&packet) {
            Ok(decoded) => {
                let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, *decoded.spec());
                buf.copy_interleaved_ref(decoded);
                interleaved.extend_from_slice(buf.samples());
            }
            // Corrupt packets are skippable.
            Err(SymphoniaError::IoError(_)) | Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => {
                return Err(TranscribeError::Transcription(format!(
                    "decode failed: {}",
                    e
                )))
            }
        }
    }

    let mono = mix_to_mono(&interleaved, channels);
    let samples = resample(&mono, sample_rate);
    debug!(
        "Decoded {}: {} samples at {} Hz ({} channel(s)) -> {} samples at {} Hz",
        source.display(),
        interleaved.len(),
        sample_rate,
        channels,
        samples.len(),
        SAMPLE_RATE
    );
    Ok(samples)
}
