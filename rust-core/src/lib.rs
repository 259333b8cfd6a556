//! FFT Analysis - spectrum computation and time/frequency figures
//! 
//! Computes the non-negative magnitude spectrum of a real-valued signal and
//! renders it next to the time-domain trace.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod demo;
pub mod plot;
pub mod signal;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use plot::{render, Figure};
pub use spectrum::{compute_spectrum, Spectrum, SpectrumAnalyzer, SpectrumError};
