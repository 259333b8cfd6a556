//! Additive white Gaussian noise

use super::SignalError;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Add zero-mean Gaussian noise to every sample in place
///
/// # Arguments
/// * `signal` - Samples to perturb
/// * `std_dev` - Noise standard deviation (0 leaves the signal untouched)
/// * `rng` - Random source; pass a seeded generator for reproducible output
pub fn add_gaussian_noise<R: Rng + ?Sized>(
    signal: &mut [f64],
    std_dev: f64,
    rng: &mut R,
) -> Result<(), SignalError> {
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(SignalError::InvalidNoiseLevel(std_dev));
    }
    if std_dev == 0.0 {
        return Ok(());
    }

    let normal = Normal::new(0.0, std_dev).map_err(|_| SignalError::InvalidNoiseLevel(std_dev))?;
    for s in signal.iter_mut() {
        *s += normal.sample(rng);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_noise_statistics() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut signal = vec![0.0; 20000];
        add_gaussian_noise(&mut signal, 0.2, &mut rng).unwrap();

        let mean = signal.iter().sum::<f64>() / signal.len() as f64;
        let var = signal.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / signal.len() as f64;

        assert!(mean.abs() < 0.01);
        assert!((var.sqrt() - 0.2).abs() < 0.01);
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let mut a = vec![1.0; 16];
        let mut b = vec![1.0; 16];
        add_gaussian_noise(&mut a, 0.5, &mut StdRng::seed_from_u64(42)).unwrap();
        add_gaussian_noise(&mut b, 0.5, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, vec![1.0; 16]);
    }

    #[test]
    fn test_zero_noise_is_identity() {
        let mut signal = vec![0.25, -0.5];
        add_gaussian_noise(&mut signal, 0.0, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(signal, vec![0.25, -0.5]);
    }

    #[test]
    fn test_invalid_noise_level() {
        let mut signal = vec![0.0; 4];
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            add_gaussian_noise(&mut signal, -0.1, &mut rng),
            Err(SignalError::InvalidNoiseLevel(-0.1))
        );
        assert!(add_gaussian_noise(&mut signal, f64::NAN, &mut rng).is_err());
    }
}
