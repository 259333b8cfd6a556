//! Error types for spectral analysis

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    #[error("Signal is empty, at least one sample is required")]
    EmptySignal,

    #[error("Sample rate must be a positive finite number (found: {0})")]
    InvalidSampleRate(f64),

    #[error("Sample {index} is not finite (found: {value})")]
    NonFiniteSample { index: usize, value: f64 },
}

impl SpectrumError {
    /// Every spectrum error is a caller mistake, never a transient condition
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SpectrumError::EmptySignal
                | SpectrumError::InvalidSampleRate(_)
                | SpectrumError::NonFiniteSample { .. }
        )
    }
}

pub(crate) fn validate_sample_rate(sample_rate: f64) -> Result<(), SpectrumError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(SpectrumError::InvalidSampleRate(sample_rate));
    }

    Ok(())
}

/// Check analysis inputs before any transform work is done
pub(crate) fn validate_input(signal: &[f64], sample_rate: f64) -> Result<(), SpectrumError> {
    validate_sample_rate(sample_rate)?;

    if signal.is_empty() {
        return Err(SpectrumError::EmptySignal);
    }

    if let Some((index, &value)) = signal.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(SpectrumError::NonFiniteSample { index, value });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_sample_rate() {
        let signal = [1.0, 2.0];

        assert_eq!(validate_input(&signal, 0.0), Err(SpectrumError::InvalidSampleRate(0.0)));
        assert_eq!(validate_input(&signal, -44100.0), Err(SpectrumError::InvalidSampleRate(-44100.0)));
        assert!(matches!(
            validate_input(&signal, f64::NAN),
            Err(SpectrumError::InvalidSampleRate(_))
        ));
        assert!(validate_input(&signal, f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_empty_signal() {
        assert_eq!(validate_input(&[], 1000.0), Err(SpectrumError::EmptySignal));
    }

    #[test]
    fn test_reports_first_non_finite_sample() {
        let signal = [0.0, 1.0, f64::INFINITY, f64::NAN];
        let err = validate_input(&signal, 1.0).unwrap_err();

        assert!(matches!(err, SpectrumError::NonFiniteSample { index: 2, .. }));
        assert!(err.is_invalid_input());
    }
}
