//! Synthesis configuration.
//!
//! Holds the fixed parameters of the sound effect and the location the
//! rendered file is written to. None of these are exposed on the command
//! line; the binary always renders with [`SynthParams::default`].

use std::path::{Path, PathBuf};

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Length of the effect in seconds.
pub const DURATION_SEC: f64 = 0.24;

/// Directory (next to this crate's directory) that receives the asset.
pub const OUTPUT_SUBDIR: &str = "UltraRunner";

/// File name of the rendered asset.
pub const OUTPUT_FILENAME: &str = "fart.wav";

/// Parameters of the filtered-noise voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthParams {
    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Length of the effect in seconds.
    pub duration_sec: f64,

    /// Scale applied to each centered white-noise draw.
    pub noise_intensity: f64,

    /// One-pole retention coefficient. Higher keeps more low end.
    pub filter_retention: f64,

    /// Envelope decay rate (1/s).
    pub decay_rate: f64,

    /// Envelope attack rate (1/s).
    pub attack_rate: f64,

    /// Output gain applied after the envelope.
    pub gain: f64,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            duration_sec: DURATION_SEC,
            noise_intensity: 0.35,
            filter_retention: 0.96,
            decay_rate: 14.0,
            attack_rate: 90.0,
            gain: 0.7,
        }
    }
}

impl SynthParams {
    /// Number of frames rendered: `round(sample_rate * duration_sec)`.
    pub fn frame_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration_sec).round() as usize
    }

    /// Validates the parameters.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.sample_rate == 0 {
            return Some("sample_rate must be > 0".to_string());
        }
        if !self.duration_sec.is_finite() || self.duration_sec <= 0.0 {
            return Some(format!(
                "duration_sec must be finite and > 0 (got {})",
                self.duration_sec
            ));
        }
        if !(0.0..1.0).contains(&self.filter_retention) {
            return Some(format!(
                "filter_retention must be in [0, 1) (got {})",
                self.filter_retention
            ));
        }
        for (name, rate) in [("decay_rate", self.decay_rate), ("attack_rate", self.attack_rate)] {
            if !rate.is_finite() || rate <= 0.0 {
                return Some(format!("{} must be finite and > 0 (got {})", name, rate));
            }
        }
        for (name, value) in [("noise_intensity", self.noise_intensity), ("gain", self.gain)] {
            if !value.is_finite() {
                return Some(format!("{} must be finite (got {})", name, value));
            }
        }

        None
    }
}

/// Returns the directory the asset is written to by default.
///
/// This crate's directory stands in for the game's `scripts/` folder, so the
/// asset lands in `<parent of crate dir>/UltraRunner`.
pub fn default_output_dir() -> PathBuf {
    let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    crate_dir
        .parent()
        .unwrap_or(crate_dir)
        .join(OUTPUT_SUBDIR)
}

/// Returns the default asset path, `<default_output_dir>/fart.wav`.
pub fn default_output_path() -> PathBuf {
    default_output_dir().join(OUTPUT_FILENAME)
}
