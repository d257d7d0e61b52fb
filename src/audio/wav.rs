//! WAV file writer for audio output.
//!
//! Encodes samples as mono 16-bit little-endian linear PCM using the hound
//! crate. hound emits the plain 16-byte `fmt ` chunk for this layout, so the
//! header is the canonical 44 bytes.

use std::io::Cursor;
use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Result, SfxError};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per encoded sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Size in bytes of the RIFF/WAVE header written before the sample data.
pub const HEADER_LEN: u64 = 44;

fn pcm_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

/// Converts a sample to a signed 16-bit PCM value.
///
/// The sample is clamped to [-1.0, 1.0] and scaled by 32767 in double
/// precision, truncating toward zero.
pub fn quantize(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f64) as i16
}

/// Writes audio samples to a mono 16-bit WAV file.
///
/// The whole file is encoded in memory and written in one call. An existing
/// file at `path` is overwritten; the parent directory must already exist.
///
/// # Example
///
/// ```ignore
/// use ultrarunner_sfx::audio::write_wav;
///
/// let samples = vec![0.0, 0.5, -0.5, 0.0];
/// write_wav(&samples, Path::new("/tmp/test.wav"), 44100)?;
/// ```
pub fn write_wav(samples: &[f64], path: &Path, sample_rate: u32) -> Result<()> {
    let bytes = encode_wav(samples, sample_rate)?;

    std::fs::write(path, bytes)
        .map_err(|e| SfxError::wav_write_failed(format!("Failed to write {}", path.display()), e))
}

/// Encodes samples into the bytes of a complete WAV file.
pub fn encode_wav(samples: &[f64], sample_rate: u32) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::with_capacity(expected_file_len(samples.len()) as usize));

    {
        let mut writer = WavWriter::new(&mut cursor, pcm_spec(sample_rate))
            .map_err(|e| SfxError::wav_write_failed("Failed to start WAV header", e))?;

        for sample in samples {
            writer
                .write_sample(quantize(*sample))
                .map_err(|e| SfxError::wav_write_failed("Failed to encode sample", e))?;
        }

        writer
            .finalize()
            .map_err(|e| SfxError::wav_write_failed("Failed to finalize WAV data", e))?;
    }

    Ok(cursor.into_inner())
}

/// Expected size in bytes of a mono 16-bit file holding `frames` frames.
pub fn expected_file_len(frames: usize) -> u64 {
    HEADER_LEN + frames as u64 * (BITS_PER_SAMPLE / 8) as u64
}
