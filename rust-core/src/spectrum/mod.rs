//! Spectral analysis with FFT

pub mod analysis;
pub mod error;
pub mod fft;
pub mod peaks;

pub use analysis::{compute_spectrum, AnalyzerConfig, Spectrum, SpectrumAnalyzer, DEFAULT_SAMPLE_RATE};
pub use error::SpectrumError;
pub use fft::FftEngine;
pub use peaks::Peak;
