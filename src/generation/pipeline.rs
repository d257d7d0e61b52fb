//! Render pipeline for the sound effect.
//!
//! Generates the filtered-noise waveform, then encodes it and places it on
//! disk: generate, create directory, write, report.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::audio::{expected_file_len, write_wav};
use crate::config::SynthParams;
use crate::error::{Result, SfxError};
use crate::generation::envelope::Envelope;
use crate::generation::noise::FilteredNoise;

/// Generates the effect's samples.
///
/// # Arguments
///
/// * `params` - Synthesis parameters
/// * `seed` - Random seed for reproducible output; `None` seeds from OS entropy
///
/// # Returns
///
/// `params.frame_count()` samples, each in [-1.0, 1.0].
pub fn generate(params: &SynthParams, seed: Option<u64>) -> Vec<f64> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    generate_with_rng(params, &mut rng)
}

/// Generates the effect's samples from the given random source.
pub fn generate_with_rng<R: Rng>(params: &SynthParams, rng: &mut R) -> Vec<f64> {
    let frames = params.frame_count();
    let rate = params.sample_rate as f64;
    let envelope = Envelope::from_params(params);
    let mut noise = FilteredNoise::from_params(rng, params);

    debug!(
        frames,
        sample_rate = params.sample_rate,
        peak_ms = envelope.peak_time() * 1000.0,
        "generating waveform"
    );

    let mut samples = Vec::with_capacity(frames);
    for i in 0..frames {
        let r = noise.next_sample();
        let t = i as f64 / rate;
        let sample = r * envelope.amplitude(t) * params.gain;
        samples.push(sample.clamp(-1.0, 1.0));
    }

    samples
}

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    /// Absolute path of the written file.
    pub path: PathBuf,
    /// Number of frames written.
    pub frames: usize,
    /// Nominal effect duration in seconds.
    pub duration_sec: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl fmt::Display for RenderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} ({}s, {} Hz mono)",
            self.path.display(),
            self.duration_sec,
            self.sample_rate
        )
    }
}

/// Generates the effect and writes it to `path` as a 16-bit mono WAV file.
///
/// The parent directory is created if missing and an existing file is
/// overwritten. A failure mid-write may leave a partial file behind.
pub fn render(params: &SynthParams, path: &Path, seed: Option<u64>) -> Result<RenderReport> {
    if let Some(reason) = params.validate() {
        return Err(SfxError::invalid_params(reason));
    }

    let samples = generate(params, seed);

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .map_err(|e| SfxError::output_dir_failed(dir.display(), e))?;
    }

    write_wav(&samples, path, params.sample_rate)?;

    let path = absolute_path(path);
    info!(
        path = %path.display(),
        frames = samples.len(),
        bytes = expected_file_len(samples.len()),
        "wrote effect"
    );

    Ok(RenderReport {
        path,
        frames: samples.len(),
        duration_sec: params.duration_sec,
        sample_rate: params.sample_rate,
    })
}

/// Makes `path` absolute and folds `.` and `..` components lexically,
/// without touching the filesystem or resolving symlinks.
fn absolute_path(path: &Path) -> PathBuf {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root.
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::tempdir;

    #[test]
    fn sample_count_matches_params() {
        let params = SynthParams::default();
        assert_eq!(generate(&params, None).len(), 10_584);

        let short = SynthParams {
            sample_rate: 8000,
            duration_sec: 0.1,
            ..Default::default()
        };
        assert_eq!(generate(&short, Some(3)).len(), 800);
    }

    #[test]
    fn samples_are_clamped() {
        let params = SynthParams::default();
        for seed in 0..20 {
            let samples = generate(&params, Some(seed));
            assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        }

        // Gain large enough to drive the filter past full scale.
        let hot = SynthParams {
            gain: 50.0,
            ..Default::default()
        };
        let samples = generate(&hot, Some(1));
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert!(samples.iter().any(|s| s.abs() == 1.0));
    }

    #[test]
    fn first_sample_is_silent() {
        let samples = generate(&SynthParams::default(), None);
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let params = SynthParams::default();
        assert_eq!(generate(&params, Some(42)), generate(&params, Some(42)));
        assert_ne!(generate(&params, Some(42)), generate(&params, Some(43)));
    }

    #[test]
    fn energy_concentrated_early() {
        let params = SynthParams::default();
        let samples = generate(&params, Some(9));
        let split = (0.1 * params.sample_rate as f64) as usize;

        let energy = |s: &[f64]| s.iter().map(|x| x.powi(2)).sum::<f64>();
        let head = energy(&samples[..split]);
        let tail = energy(&samples[split..]);
        assert!(head > tail, "head {head} tail {tail}");
    }

    #[test]
    fn render_writes_expected_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("UltraRunner").join("fart.wav");

        let report = render(&SynthParams::default(), &path, None).unwrap();
        assert!(report.path.is_absolute());
        assert_eq!(report.frames, 10_584);
        assert_eq!(report.sample_rate, 44_100);

        let len = std::fs::metadata(&path).unwrap().len();
        assert_eq!(len, 21_212);
        assert_eq!(len, expected_file_len(report.frames));

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(reader.len(), 10_584);

        for sample in reader.samples::<i16>() {
            let value = sample.unwrap() as f64 / 32767.0;
            assert!((-1.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn render_twice_matches_structure() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("out").join("a.wav");
        let second = dir.path().join("out").join("b.wav");

        render(&SynthParams::default(), &first, None).unwrap();
        // Existing directory is fine.
        render(&SynthParams::default(), &second, None).unwrap();

        let a = std::fs::read(&first).unwrap();
        let b = std::fs::read(&second).unwrap();
        assert_eq!(a.len(), b.len());
        assert_eq!(a[..44], b[..44]);
    }

    #[test]
    fn render_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fart.wav");
        std::fs::write(&path, vec![0u8; 100_000]).unwrap();

        render(&SynthParams::default(), &path, Some(1)).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 21_212);
    }

    #[test]
    fn render_fails_when_dir_cannot_be_created() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let path = blocker.join("sub").join("fart.wav");
        let err = render(&SynthParams::default(), &path, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutputDirFailed);
    }

    #[test]
    fn render_fails_when_path_is_a_directory() {
        let dir = tempdir().unwrap();
        let err = render(&SynthParams::default(), dir.path(), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::WavWriteFailed);
    }

    #[test]
    fn render_rejects_invalid_params() {
        let dir = tempdir().unwrap();
        let params = SynthParams {
            sample_rate: 0,
            ..Default::default()
        };
        let err = render(&params, &dir.path().join("x.wav"), None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParams);
    }

    #[test]
    fn report_display_format() {
        let report = RenderReport {
            path: PathBuf::from("/tmp/UltraRunner/fart.wav"),
            frames: 10_584,
            duration_sec: 0.24,
            sample_rate: 44_100,
        };
        assert_eq!(
            report.to_string(),
            "Wrote /tmp/UltraRunner/fart.wav (0.24s, 44100 Hz mono)"
        );
    }

    #[test]
    fn render_reports_normalized_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sub").join("..").join(".").join("x.wav");

        let report = render(&SynthParams::default(), &path, Some(5)).unwrap();
        assert_eq!(report.path, absolute_path(&dir.path().join("x.wav")));
        assert!(report.path.components().all(|c| {
            !matches!(c, Component::ParentDir | Component::CurDir)
        }));
        assert!(report.path.exists());
    }

    #[test]
    fn absolute_path_folds_dot_components() {
        let base = std::env::current_dir().unwrap();
        assert_eq!(absolute_path(Path::new("a/./b/../c.wav")), base.join("a").join("c.wav"));
        assert_eq!(absolute_path(Path::new("/x/y/../../z.wav")), PathBuf::from("/z.wav"));
        assert_eq!(absolute_path(Path::new("/../z.wav")), PathBuf::from("/z.wav"));
    }
}
