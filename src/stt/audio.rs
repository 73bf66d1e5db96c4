//! WAV decoding for transcription input.
//!
//! Whisper expects f32 samples, 16 kHz mono, normalized to [-1.0, 1.0].
//! Uploaded WAV files may arrive at any rate and channel count; this module
//! downmixes and resamples before inference.

use crate::defaults::SAMPLE_RATE;
use crate::error::{Result, SubcueError};
use std::path::Path;

/// Read a 16-bit PCM WAV file as normalized mono samples at 16 kHz.
pub fn decode_wav_file(path: &Path) -> Result<Vec<f32>> {
    let mut reader = hound::WavReader::open(path).map_err(|e| SubcueError::MediaFormat {
        message: format!("failed to parse WAV file {}: {}", path.display(), e),
    })?;

    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(SubcueError::MediaFormat {
            message: format!(
                "expected 16-bit PCM WAV, got {}-bit {:?}",
                spec.bits_per_sample, spec.sample_format
            ),
        });
    }

    let raw: Vec<i16> = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| SubcueError::MediaFormat {
            message: format!("failed to read WAV samples: {}", e),
        })?;

    let mono = downmix(&raw, spec.channels);
    let resampled = if spec.sample_rate != SAMPLE_RATE {
        resample(&mono, spec.sample_rate, SAMPLE_RATE)
    } else {
        mono
    };

    Ok(resampled
        .iter()
        .map(|&sample| sample as f32 / 32768.0)
        .collect())
}

/// Average interleaved channels down to mono.
fn downmix(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels <= 1 {
        return samples.to_vec();
    }
    let channels = channels as usize;
    samples
        .chunks_exact(channels)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| s as i32).sum();
            (sum / channels as i32) as i16
        })
        .collect()
}

/// Simple linear interpolation resampling.
fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let source_pos = i as f64 * ratio;
            let source_idx = source_pos.floor() as usize;
            let fraction = source_pos - source_idx as f64;

            if source_idx + 1 >= samples.len() {
                samples[samples.len() - 1]
            } else {
                let left = samples[source_idx] as f64;
                let right = samples[source_idx + 1] as f64;
                (left + (right - left) * fraction) as i16
            }
        })
        .collect()
}
