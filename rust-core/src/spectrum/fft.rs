//! FFT engine using rustfft for the full complex transform
//!
//! Also defines the DFT bin-frequency convention used by the analyzer

use num_complex::Complex;
use rustfft::FftPlanner;

/// FFT engine for arbitrary-length signals
///
/// Holds a planner so repeated transforms of the same length reuse twiddle
/// tables. Results are never cached.
pub struct FftEngine {
    planner: FftPlanner<f64>,
}

impl FftEngine {
    /// Create new FFT engine
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Compute the full N-point DFT of a real signal
    ///
    /// # Arguments
    /// * `signal` - Input samples (N = signal.len())
    ///
    /// # Returns
    /// N complex coefficients X[0..N]
    pub fn transform(&mut self, signal: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> = signal
            .iter()
            .map(|&s| Complex::new(s, 0.0))
            .collect();

        if buffer.is_empty() {
            return buffer;
        }

        let fft = self.planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);

        buffer
    }

    /// Compute |X[k]| for every bin of the full transform
    pub fn compute_magnitude(&mut self, signal: &[f64]) -> Vec<f64> {
        self.transform(signal).iter().map(|c| c.norm()).collect()
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Frequency label of bin `k` in an `n`-point transform
///
/// Bins `0..=n/2` map to `k * fs / n`; the remaining bins are the mirrored
/// negative frequencies `(k - n) * fs / n`. For even `n` the Nyquist bin is
/// labelled `+fs/2`.
///
/// # Arguments
/// * `k` - Bin index (0..n)
/// * `n` - Transform length
/// * `sample_rate` - Sample rate in Hz
pub fn bin_frequency(k: usize, n: usize, sample_rate: f64) -> f64 {
    let resolution = sample_rate / n as f64;
    if k <= n / 2 {
        k as f64 * resolution
    } else {
        -((n - k) as f64) * resolution
    }
}

/// Frequency labels for every bin of an `n`-point transform, in bin order
pub fn bin_frequencies(n: usize, sample_rate: f64) -> Vec<f64> {
    (0..n).map(|k| bin_frequency(k, n, sample_rate)).collect()
}

/// Number of bins with a non-negative frequency label (n/2 + 1 for n >= 1)
pub fn nonnegative_bin_count(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        n / 2 + 1
    }
}
