//! Sums of sinusoids sampled on a uniform grid

use super::SignalError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Longest signal `multi_tone` will synthesise
pub const MAX_SAMPLES: usize = 1 << 27;

/// One sinusoidal component: `amplitude * sin(2π * frequency * t)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tone {
    /// Frequency in Hz
    pub frequency: f64,

    /// Peak amplitude
    pub amplitude: f64,
}

impl Tone {
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }

    /// Value of this component at time `t` seconds
    pub fn sample(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency * t).sin()
    }
}

/// Elapsed time of each sample: `i / sample_rate`
pub fn time_axis(len: usize, sample_rate: f64) -> Vec<f64> {
    (0..len).map(|i| i as f64 / sample_rate).collect()
}

/// Sample a sum of tones
///
/// # Arguments
/// * `tones` - Components to add together
/// * `sample_rate` - Sample rate in Hz
/// * `duration` - Signal length in seconds
///
/// # Returns
/// `round(sample_rate * duration)` samples at `t = i / sample_rate`, end point excluded
pub fn multi_tone(tones: &[Tone], sample_rate: f64, duration: f64) -> Result<Vec<f64>, SignalError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(SignalError::InvalidSampleRate(sample_rate));
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(SignalError::InvalidDuration(duration));
    }

    let len = (sample_rate * duration).round();
    if !len.is_finite() || len > MAX_SAMPLES as f64 {
        return Err(SignalError::TooManySamples(len));
    }
    let len = len as usize;

    Ok(time_axis(len, sample_rate)
        .into_iter()
        .map(|t| tones.iter().map(|tone| tone.sample(t)).sum())
        .collect())
}
