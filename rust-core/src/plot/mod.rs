//! Two-panel time/frequency figures
//!
//! `render` builds a [`Figure`] value; persisting it is left to the caller.

pub mod figure;

pub use figure::{Figure, Panel};

use crate::signal::time_axis;
use crate::spectrum::{AnalyzerConfig, SpectrumAnalyzer, SpectrumError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Title used when the caller does not supply one
pub const DEFAULT_TITLE: &str = "FFT Analysis";

#[derive(Error, Debug)]
pub enum PlotError {
    #[error(transparent)]
    Spectrum(#[from] SpectrumError),

    #[error("Failed to render figure: {0}")]
    Render(String),

    #[error("Failed to write figure: {0}")]
    Io(#[from] std::io::Error),
}

/// Figure appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Figure title (shown above both panels)
    pub title: String,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            width: 1000,
            height: 800,
        }
    }
}

/// Render signal and spectrum with a given title and default size
///
/// # Arguments
/// * `signal` - Time-domain samples
/// * `sample_rate` - Sample rate in Hz
/// * `title` - Figure title
pub fn render(signal: &[f64], sample_rate: f64, title: &str) -> Result<Figure, SpectrumError> {
    let config = PlotConfig {
        title: title.to_string(),
        ..PlotConfig::default()
    };
    render_with(signal, sample_rate, &config)
}

/// Render signal and spectrum into a two-panel figure
///
/// Top panel: amplitude against `i / sample_rate`. Bottom panel: magnitude
/// spectrum from [`SpectrumAnalyzer`]. Analyzer errors are returned unchanged.
pub fn render_with(
    signal: &[f64],
    sample_rate: f64,
    config: &PlotConfig,
) -> Result<Figure, SpectrumError> {
    let mut analyzer = SpectrumAnalyzer::new(AnalyzerConfig { sample_rate });
    let spectrum = analyzer.analyze(signal)?;

    let time_domain = Panel {
        title: "Time Domain Signal".to_string(),
        x_label: "Time (s)".to_string(),
        y_label: "Amplitude".to_string(),
        points: time_axis(signal.len(), sample_rate)
            .into_iter()
            .zip(signal.iter().copied())
            .collect(),
    };

    let frequency_domain = Panel {
        title: "Frequency Domain (FFT)".to_string(),
        x_label: "Frequency (Hz)".to_string(),
        y_label: "Magnitude".to_string(),
        points: spectrum.points().collect(),
    };

    Ok(Figure {
        title: config.title.clone(),
        width: config.width,
        height: config.height,
        time_domain,
        frequency_domain,
        spectrum,
    })
}
