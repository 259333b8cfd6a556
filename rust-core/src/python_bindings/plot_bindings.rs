//! Python bindings for figure rendering

use numpy::PyReadonlyArray1;
use pyo3::prelude::*;
use std::path::PathBuf;

use super::spectrum_bindings::contiguous;
use crate::plot::render;

/// Render the time/frequency figure and optionally save it
///
/// The path extension picks the format: png, jpg or bmp
///
/// Args:
///     signal: Input samples as numpy array
///     sample_rate: Sample rate in Hz (default: 1.0)
///     title: Figure title
///     path: Output image path; nothing is written when omitted
///     peaks: Number of dominant peaks to report
///
/// Returns:
///     List of (frequency, magnitude) tuples, strongest first
#[pyfunction]
#[pyo3(signature = (signal, sample_rate=1.0, title="FFT Analysis", path=None, peaks=3))]
pub fn plot_fft(
    signal: PyReadonlyArray1<f64>,
    sample_rate: f64,
    title: &str,
    path: Option<PathBuf>,
    peaks: usize,
) -> PyResult<Vec<(f64, f64)>> {
    let figure = render(contiguous(&signal)?, sample_rate, title)?;

    if let Some(path) = path {
        figure.save(path)?;
    }

    Ok(figure
        .spectrum
        .dominant_peaks(peaks)
        .into_iter()
        .map(|p| (p.frequency, p.magnitude))
        .collect())
}
