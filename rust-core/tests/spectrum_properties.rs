//! Property and scenario tests for the public analysis API

use fft_analysis::signal::{multi_tone, Tone};
use fft_analysis::spectrum::{compute_spectrum, DEFAULT_SAMPLE_RATE};
use fft_analysis::{render, SpectrumError};
use proptest::prelude::*;
use std::f64::consts::PI;

fn signal_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e3..1.0e3f64, 1..300)
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(DEFAULT_SAMPLE_RATE), 0.5..96_000.0f64]
}

proptest! {
    #[test]
    fn lengths_match_nonnegative_bin_count(signal in signal_strategy(), rate in rate_strategy()) {
        let n = signal.len();
        let (freqs, mags) = compute_spectrum(&signal, rate).unwrap();

        let expected = if n % 2 == 0 { n / 2 + 1 } else { (n + 1) / 2 };
        prop_assert_eq!(freqs.len(), mags.len());
        prop_assert_eq!(freqs.len(), expected);
    }

    #[test]
    fn frequencies_sorted_from_zero(signal in signal_strategy(), rate in rate_strategy()) {
        let (freqs, _) = compute_spectrum(&signal, rate).unwrap();

        prop_assert_eq!(freqs[0], 0.0);
        prop_assert!(freqs.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(*freqs.last().unwrap() <= rate / 2.0 + 1e-9 * rate);
    }

    #[test]
    fn magnitudes_non_negative(signal in signal_strategy(), rate in rate_strategy()) {
        let (_, mags) = compute_spectrum(&signal, rate).unwrap();
        prop_assert!(mags.iter().all(|&m| m >= 0.0));
    }

    #[test]
    fn repeated_calls_are_identical(signal in signal_strategy(), rate in rate_strategy()) {
        prop_assert_eq!(compute_spectrum(&signal, rate), compute_spectrum(&signal, rate));
    }

    #[test]
    fn doubling_samples_doubles_magnitudes(signal in signal_strategy(), rate in rate_strategy()) {
        let doubled: Vec<f64> = signal.iter().map(|s| 2.0 * s).collect();

        let (freqs, mags) = compute_spectrum(&signal, rate).unwrap();
        let (freqs2, mags2) = compute_spectrum(&doubled, rate).unwrap();

        prop_assert_eq!(freqs, freqs2);
        let scale = mags.iter().cloned().fold(1.0, f64::max);
        for (m, m2) in mags.iter().zip(&mags2) {
            prop_assert!((m2 - 2.0 * m).abs() <= 1e-9 * scale);
        }
    }

    #[test]
    fn single_sample_is_dc(x in -1.0e6..1.0e6f64, rate in rate_strategy()) {
        let (freqs, mags) = compute_spectrum(&[x], rate).unwrap();

        prop_assert_eq!(freqs, vec![0.0]);
        prop_assert!((mags[0] - x.abs()).abs() <= 1e-12 * x.abs().max(1.0));
    }
}

#[test]
fn pure_sinusoid_peaks_at_its_bin() {
    let n = 512;
    let sample_rate = 2048.0;
    let amplitude = 1.75;
    let bin = 37;
    let freq = bin as f64 * sample_rate / n as f64;

    let signal: Vec<f64> = (0..n)
        .map(|i| amplitude * (2.0 * PI * freq * i as f64 / sample_rate).sin())
        .collect();
    let (freqs, mags) = compute_spectrum(&signal, sample_rate).unwrap();

    assert_eq!(freqs[bin], freq);
    assert!((mags[bin] - amplitude * n as f64 / 2.0).abs() < 1e-8);
    for (k, &m) in mags.iter().enumerate() {
        if k != bin {
            assert!(m < 1e-8, "bin {k} should be empty, got {m}");
        }
    }
}

#[test]
fn three_tone_scenario() {
    let tones = [
        Tone::new(50.0, 3.0),
        Tone::new(120.0, 1.5),
        Tone::new(200.0, 0.5),
    ];
    let signal = multi_tone(&tones, 1000.0, 1.0).unwrap();
    assert_eq!(signal.len(), 1000);

    let (freqs, mags) = compute_spectrum(&signal, 1000.0).unwrap();
    let at = |hz: f64| freqs.iter().position(|&f| f == hz).unwrap();

    let (i50, i120, i200) = (at(50.0), at(120.0), at(200.0));
    for &i in &[i50, i120, i200] {
        assert!(mags[i] > mags[i - 1] && mags[i] > mags[i + 1]);
    }
    assert!(mags[i50] > mags[i120]);
    assert!(mags[i120] > mags[i200]);
}

#[test]
fn invalid_input_is_reported() {
    assert_eq!(compute_spectrum(&[], 1000.0), Err(SpectrumError::EmptySignal));
    assert_eq!(
        compute_spectrum(&[1.0], 0.0),
        Err(SpectrumError::InvalidSampleRate(0.0))
    );

    let err = render(&[1.0, 2.0], -1.0, "bad").unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn rendered_figure_saves_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fft_analysis.png");

    let signal = multi_tone(&[Tone::new(5.0, 1.0)], 100.0, 2.0).unwrap();
    let figure = render(&signal, 100.0, "FFT Analysis").unwrap();
    figure.save(&path).unwrap();

    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}
