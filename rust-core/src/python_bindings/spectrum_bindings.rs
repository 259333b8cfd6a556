//! Python bindings for spectrum analysis

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::spectrum::{self, AnalyzerConfig, SpectrumAnalyzer};

type SpectrumArrays<'py> = (&'py PyArray1<f64>, &'py PyArray1<f64>);

pub(super) fn contiguous<'a>(signal: &'a PyReadonlyArray1<f64>) -> PyResult<&'a [f64]> {
    signal
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Compute the non-negative magnitude spectrum of a real signal
///
/// Args:
///     signal: Input samples as numpy array
///     sample_rate: Sample rate in Hz (default: 1.0, cycles/sample)
///
/// Returns:
///     (frequencies, magnitudes) numpy arrays of equal length
#[pyfunction]
#[pyo3(signature = (signal, sample_rate=1.0))]
pub fn compute_spectrum<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    sample_rate: f64,
) -> PyResult<SpectrumArrays<'py>> {
    let (freqs, mags) = spectrum::compute_spectrum(contiguous(&signal)?, sample_rate)?;

    Ok((PyArray1::from_vec(py, freqs), PyArray1::from_vec(py, mags)))
}

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// Args:
    ///     sample_rate: Sample rate in Hz
    #[new]
    #[pyo3(signature = (sample_rate=1.0))]
    fn new(sample_rate: f64) -> Self {
        Self {
            analyzer: SpectrumAnalyzer::new(AnalyzerConfig { sample_rate }),
        }
    }

    /// Analyze signal and return (frequencies, magnitudes)
    fn analyze<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<SpectrumArrays<'py>> {
        let (freqs, mags) = self.analyzer.analyze(contiguous(&signal)?)?.into_parts();

        Ok((PyArray1::from_vec(py, freqs), PyArray1::from_vec(py, mags)))
    }

    /// Frequencies in Hz of the bins kept for an n-sample signal
    fn frequency_bins_hz<'py>(&self, py: Python<'py>, n: usize) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.analyzer.frequency_bins_hz(n)?))
    }

    /// Update configuration
    #[pyo3(signature = (sample_rate=None))]
    fn update_config(&mut self, sample_rate: Option<f64>) {
        let mut config = self.analyzer.config().clone();

        if let Some(sr) = sample_rate {
            config.sample_rate = sr;
        }

        self.analyzer.update_config(config);
    }

    /// Get current sample rate
    fn get_sample_rate(&self) -> f64 {
        self.analyzer.config().sample_rate
    }
}
