//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::plot::PlotError;
use crate::spectrum::SpectrumError;

mod plot_bindings;
mod spectrum_bindings;

impl From<SpectrumError> for PyErr {
    fn from(err: SpectrumError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

impl From<PlotError> for PyErr {
    fn from(err: PlotError) -> Self {
        match err {
            PlotError::Spectrum(e) => e.into(),
            PlotError::Io(e) => PyIOError::new_err(e.to_string()),
            PlotError::Render(msg) => PyRuntimeError::new_err(msg),
        }
    }
}

/// Python module definition
#[pymodule]
fn fft_analysis(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(spectrum_bindings::compute_spectrum, m)?)?;
    m.add_function(wrap_pyfunction!(plot_bindings::plot_fft, m)?)?;
    m.add_class::<spectrum_bindings::PySpectrumAnalyzer>()?;

    Ok(())
}
