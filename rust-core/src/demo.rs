//! Multi-tone demonstration: synthesise, analyse, render, save

use crate::plot::{render_with, Figure, PlotConfig, PlotError};
use crate::signal::{add_gaussian_noise, multi_tone, SignalError, Tone};
use crate::spectrum::Peak;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Invalid demo configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Signal(#[from] SignalError),

    #[error(transparent)]
    Plot(#[from] PlotError),
}

/// Demo parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Signal length in seconds
    pub duration: f64,

    /// Sinusoidal components of the test signal
    pub tones: Vec<Tone>,

    /// Standard deviation of the additive Gaussian noise
    pub noise_std: f64,

    /// Noise seed; `None` draws a fresh one from the OS
    pub seed: Option<u64>,

    /// Figure title
    pub title: String,

    /// Where the rendered figure is written
    pub output: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sample_rate: 1000.0,
            duration: 1.0,
            tones: vec![
                Tone::new(50.0, 3.0),
                Tone::new(120.0, 1.5),
                Tone::new(200.0, 0.5),
            ],
            noise_std: 0.2,
            seed: None,
            title: "FFT Analysis of Multi-Frequency Signal".to_string(),
            output: PathBuf::from("fft_analysis.png"),
        }
    }
}

impl DemoConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(s: &str) -> Result<Self, DemoError> {
        Ok(toml::from_str(s)?)
    }

    /// Noisy multi-tone signal described by this configuration
    pub fn generate_signal(&self) -> Result<Vec<f64>, SignalError> {
        let mut signal = multi_tone(&self.tones, self.sample_rate, self.duration)?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        add_gaussian_noise(&mut signal, self.noise_std, &mut rng)?;

        Ok(signal)
    }
}

/// Outcome of a demo run
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// File the figure was written to
    pub output: PathBuf,

    /// Strongest spectral peaks, one per configured tone, strongest first
    pub peaks: Vec<Peak>,

    pub figure: Figure,
}

/// Run the demo end to end and write the figure to `config.output`
pub fn run_demo(config: &DemoConfig) -> Result<DemoReport, DemoError> {
    let signal = config.generate_signal()?;
    debug!(samples = signal.len(), sample_rate = config.sample_rate, "generated test signal");

    let plot_config = PlotConfig {
        title: config.title.clone(),
        ..PlotConfig::default()
    };
    let figure = render_with(&signal, config.sample_rate, &plot_config).map_err(PlotError::from)?;
    figure.save(&config.output)?;

    let peaks = figure.spectrum.dominant_peaks(config.tones.len());
    for peak in &peaks {
        info!(frequency = peak.frequency, magnitude = peak.magnitude, "detected peak");
    }

    Ok(DemoReport {
        output: config.output.clone(),
        peaks,
        figure,
    })
}
