//! Attack/decay amplitude envelope.
//!
//! `amplitude(t) = exp(-t * decay) * (1 - exp(-t * attack))`
//!
//! The attack term starts at zero and rises with time constant `1/attack`;
//! the decay term falls with time constant `1/decay`. With the default
//! rates (90 and 14 per second) the product peaks around 22 ms.

use crate::config::SynthParams;

/// Two-exponential attack/decay envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Decay rate (1/s).
    pub decay_rate: f64,
    /// Attack rate (1/s).
    pub attack_rate: f64,
}

impl Envelope {
    pub fn new(decay_rate: f64, attack_rate: f64) -> Self {
        Self {
            decay_rate,
            attack_rate,
        }
    }

    /// Builds the envelope described by `params`.
    pub fn from_params(params: &SynthParams) -> Self {
        Self::new(params.decay_rate, params.attack_rate)
    }

    /// Envelope value at `t` seconds.
    #[inline]
    pub fn amplitude(&self, t: f64) -> f64 {
        (-t * self.decay_rate).exp() * (1.0 - (-t * self.attack_rate).exp())
    }

    /// Time of the envelope maximum, where the derivative is zero:
    /// `ln((attack + decay) / decay) / attack`.
    pub fn peak_time(&self) -> f64 {
        ((self.attack_rate + self.decay_rate) / self.decay_rate).ln() / self.attack_rate
    }

    /// Maximum envelope value.
    pub fn peak(&self) -> f64 {
        self.amplitude(self.peak_time())
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::from_params(&SynthParams::default())
    }
}
