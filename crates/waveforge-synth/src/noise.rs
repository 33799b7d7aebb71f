//! Uniform noise generation.
//!
//! Noise is used only as an additive texture layer on top of tonal
//! content (key clicks, shutter clacks, swooshes), never on its own.
//! All randomness flows through an explicitly seeded PCG32 so output is
//! reproducible; see [`crate::rng`].

use rand::Rng;
use rand_pcg::Pcg32;

/// Generates independent uniform random samples in `[low, high)`.
pub fn uniform(low: f64, high: f64, num_samples: usize, rng: &mut Pcg32) -> Vec<f64> {
    let span = high - low;
    (0..num_samples)
        .map(|_| low + span * rng.gen::<f64>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_uniform_range() {
        let mut rng = create_rng(42);
        let samples = uniform(-0.05, 0.05, 10_000, &mut rng);

        assert_eq!(samples.len(), 10_000);
        for &s in &samples {
            assert!((-0.05..=0.05).contains(&s));
        }
    }

    #[test]
    fn test_uniform_determinism() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);

        assert_eq!(
            uniform(-1.0, 1.0, 100, &mut rng1),
            uniform(-1.0, 1.0, 100, &mut rng2)
        );
    }

    #[test]
    fn test_degenerate_range() {
        let mut rng = create_rng(42);
        let samples = uniform(0.25, 0.25, 16, &mut rng);
        assert!(samples.iter().all(|&s| s == 0.25));
    }
}
