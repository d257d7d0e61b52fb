//! Low-passed noise source.
//!
//! A one-pole IIR low-pass over centered white noise:
//! `r = r * retention + (u - 0.5) * intensity`, with `u` uniform in [0, 1).
//! The retention coefficient sets the cutoff; values close to 1 keep more
//! low-frequency rumble.

use rand::Rng;

use crate::config::SynthParams;

/// Stateful filtered-noise generator.
///
/// Each output depends on the previous output and one fresh draw, so the
/// sequence must be produced strictly in order.
#[derive(Debug)]
pub struct FilteredNoise<'a, R: Rng> {
    rng: &'a mut R,
    retention: f64,
    intensity: f64,
    /// Filter state.
    r: f64,
}

impl<'a, R: Rng> FilteredNoise<'a, R> {
    pub fn new(rng: &'a mut R, retention: f64, intensity: f64) -> Self {
        Self {
            rng,
            retention,
            intensity,
            r: 0.0,
        }
    }

    /// Builds the noise source described by `params`, starting from rest.
    pub fn from_params(rng: &'a mut R, params: &SynthParams) -> Self {
        Self::new(rng, params.filter_retention, params.noise_intensity)
    }

    /// Advances the filter by one sample and returns the new state.
    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        let u: f64 = self.rng.gen();
        self.r = self.r * self.retention + (u - 0.5) * self.intensity;
        self.r
    }
}
