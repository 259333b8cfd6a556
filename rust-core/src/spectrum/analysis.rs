//! High-level spectrum analyzer
//!
//! Combines the FFT engine with the bin-frequency convention and keeps only
//! the non-negative half of the spectrum of a real-valued signal

use super::error::{validate_input, validate_sample_rate, SpectrumError};
use super::fft::{bin_frequencies, nonnegative_bin_count, FftEngine};
use tracing::debug;

/// Sample rate used when the caller does not supply one (frequencies are then in cycles/sample)
pub const DEFAULT_SAMPLE_RATE: f64 = 1.0;

/// Non-negative half of a magnitude spectrum
///
/// `frequencies` and `magnitudes` are index-aligned and always the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    magnitudes: Vec<f64>,
    sample_rate: f64,
    sample_count: usize,
}

impl Spectrum {
    /// Frequency of each retained bin in Hz, ascending from 0
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// |X[k]| of each retained bin
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// Number of retained bins
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Sample rate the spectrum was computed with
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Length of the analyzed signal (N)
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Frequency resolution (Hz per bin)
    pub fn bin_width(&self) -> f64 {
        self.sample_rate / self.sample_count as f64
    }

    /// (frequency, magnitude) pairs in bin order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.frequencies
            .iter()
            .copied()
            .zip(self.magnitudes.iter().copied())
    }

    /// Magnitude of the bin nearest to `frequency`
    ///
    /// Returns `None` when `frequency` lies outside `[0, max frequency]`.
    pub fn magnitude_at(&self, frequency: f64) -> Option<f64> {
        let last = *self.frequencies.last()?;
        if !(0.0..=last).contains(&frequency) {
            return None;
        }

        let bin = (frequency / self.bin_width()).round() as usize;
        self.magnitudes.get(bin.min(self.len() - 1)).copied()
    }

    /// Strongest bin as (frequency, magnitude)
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.points()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// Magnitude spectrum in dB
    ///
    /// # Arguments
    /// * `reference` - Reference level for 0 dB
    pub fn magnitudes_db(&self, reference: f64) -> Vec<f64> {
        self.magnitudes
            .iter()
            .map(|&mag| {
                let mag_clamped = mag.max(1e-10); // Avoid log(0)
                20.0 * (mag_clamped / reference).log10()
            })
            .collect()
    }

    /// Split into the parallel (frequencies, magnitudes) vectors
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.frequencies, self.magnitudes)
    }
}

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

/// Spectrum analyzer for real-valued signals
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    fft_engine: FftEngine,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            fft_engine: FftEngine::new(),
        }
    }

    /// Analyze signal and return its non-negative magnitude spectrum
    ///
    /// # Arguments
    /// * `signal` - Input samples, non-empty and finite
    ///
    /// # Returns
    /// `N/2 + 1` bins for an N-sample signal, or `SpectrumError` when the
    /// signal is empty, contains a non-finite sample, or the configured
    /// sample rate is not positive
    pub fn analyze(&mut self, signal: &[f64]) -> Result<Spectrum, SpectrumError> {
        let sample_rate = self.config.sample_rate;
        validate_input(signal, sample_rate)?;

        let n = signal.len();
        let coefficients = self.fft_engine.transform(signal);
        let labels = bin_frequencies(n, sample_rate);

        let retained = nonnegative_bin_count(n);
        let mut frequencies = Vec::with_capacity(retained);
        let mut magnitudes = Vec::with_capacity(retained);

        for (freq, coeff) in labels.into_iter().zip(coefficients.iter()) {
            if freq >= 0.0 {
                frequencies.push(freq);
                magnitudes.push(coeff.norm());
            }
        }

        debug!(
            samples = n,
            bins = frequencies.len(),
            sample_rate,
            "computed magnitude spectrum"
        );

        Ok(Spectrum {
            frequencies,
            magnitudes,
            sample_rate,
            sample_count: n,
        })
    }

    /// Frequency labels in Hz of the bins `analyze` keeps for an `n`-sample signal
    ///
    /// Fails with `InvalidSampleRate` under the same rule as `analyze`; a
    /// negative rate would otherwise report mirrored bins as positive.
    pub fn frequency_bins_hz(&self, n: usize) -> Result<Vec<f64>, SpectrumError> {
        let sample_rate = self.config.sample_rate;
        validate_sample_rate(sample_rate)?;

        Ok(bin_frequencies(n, sample_rate)
            .into_iter()
            .filter(|&f| f >= 0.0)
            .collect())
    }

    /// Update configuration
    pub fn update_config(&mut self, config: AnalyzerConfig) {
        self.config = config;
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

/// Compute the non-negative magnitude spectrum of a real signal
///
/// # Arguments
/// * `signal` - Input samples
/// * `sample_rate` - Sample rate in Hz (use [`DEFAULT_SAMPLE_RATE`] for cycles/sample)
///
/// # Returns
/// Parallel (frequencies, magnitudes) vectors of equal length
pub fn compute_spectrum(
    signal: &[f64],
    sample_rate: f64,
) -> Result<(Vec<f64>, Vec<f64>), SpectrumError> {
    let mut analyzer = SpectrumAnalyzer::new(AnalyzerConfig { sample_rate });
    Ok(analyzer.analyze(signal)?.into_parts())
}
