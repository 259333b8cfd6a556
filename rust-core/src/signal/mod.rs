//! Synthetic test signals

pub mod noise;
pub mod tone;

pub use noise::add_gaussian_noise;
pub use tone::{multi_tone, time_axis, Tone};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Sample rate must be a positive finite number (found: {0})")]
    InvalidSampleRate(f64),

    #[error("Duration must be a non-negative finite number of seconds (found: {0})")]
    InvalidDuration(f64),

    #[error("Signal of {0} samples exceeds the {max} sample limit", max = tone::MAX_SAMPLES)]
    TooManySamples(f64),

    #[error("Noise standard deviation must be non-negative and finite (found: {0})")]
    InvalidNoiseLevel(f64),
}
