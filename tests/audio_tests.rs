// Integration tests for audio handling
//
// These tests verify WAV chunk encoding and cleanup, plus the sample
// conversion helpers and decoding through the media probe.

use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use murmur::audio::{mix_to_mono, read_samples, resample, ChunkFile, SAMPLE_RATE};

#[test]
fn test_chunk_file_is_valid_wav() -> Result<()> {
    let samples = vec![0.5_f32; 160];
    let chunk = ChunkFile::write(&samples)?;
    assert_eq!(chunk.sample_count(), 160);

    let mut reader = hound::WavReader::open(chunk.path())?;
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, SAMPLE_RATE);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);

    let values: Vec<i16> = reader.samples::<i16>().collect::<std::result::Result<_, _>>()?;
    assert_eq!(values.len(), 160);
    assert_eq!(values[0], 16384, "0.5 scales to half of i16 range");
    Ok(())
}

#[test]
fn test_chunk_file_removed_on_drop() -> Result<()> {
    let path: PathBuf;
    {
        let chunk = ChunkFile::write(&[0.0; 16])?;
        path = chunk.path().to_path_buf();
        assert!(path.exists());
    }
    assert!(!path.exists(), "chunk file must not outlive its handle");
    Ok(())
}

#[test]
fn test_chunk_file_clamps_out_of_range_samples() -> Result<()> {
    let chunk = ChunkFile::write(&[2.0, -2.0])?;

    let mut reader = hound::WavReader::open(chunk.path())?;
    let values: Vec<i16> = reader.samples::<i16>().collect::<std::result::Result<_, _>>()?;
    assert_eq!(values, vec![32767, -32767]);
    Ok(())
}

#[test]
fn test_mix_to_mono_averages_channels() {
    let interleaved = [0.0, 1.0, 0.5, 0.5, -1.0, 1.0];
    assert_eq!(mix_to_mono(&interleaved, 2), vec![0.5, 0.5, 0.0]);
}

#[test]
fn test_mix_to_mono_passes_mono_through() {
    let samples = [0.1, 0.2, 0.3];
    assert_eq!(mix_to_mono(&samples, 1), samples.to_vec());
}

#[test]
fn test_resample_halves_double_rate_input() {
    let input: Vec<f32> = (0..64).map(|i| i as f32).collect();
    let output = resample(&input, 32_000);

    assert_eq!(output.len(), 32);
    for (i, value) in output.iter().enumerate() {
        assert_eq!(*value, input[i * 2], "sample {}", i);
    }
}

#[test]
fn test_resample_identity_at_target_rate() {
    let input = vec![0.25_f32; 10];
    assert_eq!(resample(&input, SAMPLE_RATE), input);
}

fn write_wav(path: &std::path::Path, sample_rate: u32, channels: u16, samples: &[i16]) -> Result<()> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

#[test]
fn test_read_samples_decodes_mono_wav() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("tone.wav");
    write_wav(&path, SAMPLE_RATE, 1, &[1000; 320])?;

    let samples = read_samples(&path)?;
    assert_eq!(samples.len(), 320);
    let expected = 1000.0 / 32768.0;
    for sample in &samples {
        assert!(
            (sample - expected).abs() < 1e-3,
            "sample {} vs expected {}",
            sample,
            expected
        );
    }
    Ok(())
}

#[test]
fn test_read_samples_converts_rate_and_channels() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("stereo8k.wav");
    // 400 stereo frames at 8 kHz.
    let frames: Vec<i16> = (0..400).flat_map(|_| [800, 1200]).collect();
    write_wav(&path, 8_000, 2, &frames)?;

    let samples = read_samples(&path)?;
    // 400 mono frames upsampled from 8 kHz land near 800 at 16 kHz.
    assert!(
        (samples.len() as i64 - 800).abs() <= 2,
        "expected ~800 samples, got {}",
        samples.len()
    );
    let expected = 1000.0 / 32768.0;
    assert!(
        (samples[0] - expected).abs() < 1e-3,
        "channels should average: {} vs {}",
        samples[0],
        expected
    );
    Ok(())
}

#[test]
fn test_read_samples_missing_file() {
    assert!(read_samples(std::path::Path::new("/nonexistent/audio.wav")).is_err());
}
