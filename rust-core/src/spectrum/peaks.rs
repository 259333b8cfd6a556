//! Dominant frequency detection over a magnitude spectrum

use super::analysis::Spectrum;

/// A local maximum in a magnitude spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Bin index within the retained (non-negative) spectrum
    pub bin: usize,

    /// Frequency in Hz
    pub frequency: f64,

    /// Magnitude |X[k]|
    pub magnitude: f64,
}

/// Indices of strict local maxima
///
/// The first and last bins only have one neighbour and count as maxima when
/// they exceed it. A single-bin sequence is its own maximum.
pub fn local_maxima(magnitudes: &[f64]) -> Vec<usize> {
    let n = magnitudes.len();
    if n == 1 {
        return vec![0];
    }

    (0..n)
        .filter(|&i| {
            let left = i == 0 || magnitudes[i] > magnitudes[i - 1];
            let right = i + 1 == n || magnitudes[i] > magnitudes[i + 1];
            left && right
        })
        .collect()
}

impl Spectrum {
    /// The `count` strongest local maxima, strongest first
    pub fn dominant_peaks(&self, count: usize) -> Vec<Peak> {
        let frequencies = self.frequencies();
        let magnitudes = self.magnitudes();

        let mut peaks: Vec<Peak> = local_maxima(magnitudes)
            .into_iter()
            .map(|bin| Peak {
                bin,
                frequency: frequencies[bin],
                magnitude: magnitudes[bin],
            })
            .collect();

        peaks.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
        peaks.truncate(count);
        peaks
    }
}
