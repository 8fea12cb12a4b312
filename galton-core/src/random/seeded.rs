//! Deterministic random provider for seed-driven tests.

use super::RandomProvider;
use rand::distr::{Distribution, StandardUniform};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;

/// Deterministic random provider backed by a fixed-seed engine.
///
/// Two providers constructed with the same seed produce identical draw
/// sequences, which is what makes rendering and concatenation testable
/// without touching OS entropy.
///
/// Cloning forks the engine state: the clone continues the draw sequence
/// from the point of the clone, independently of the original.
///
/// # Example
///
/// ```rust
/// use galton_core::{RandomProvider, SeededRandomProvider};
///
/// let provider = SeededRandomProvider::new(42);
/// let value: u64 = provider.random();
/// ```
#[derive(Clone, Debug)]
pub struct SeededRandomProvider {
    rng: RefCell<ChaCha8Rng>,
}

impl SeededRandomProvider {
    /// Create a provider whose engine is seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl RandomProvider for SeededRandomProvider {
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>,
    {
        self.rng.borrow_mut().random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_randomness() {
        // Two providers with same seed should produce same values
        let provider1 = SeededRandomProvider::new(42);
        let value1_1: u64 = provider1.random();
        let value1_2: u64 = provider1.random();

        let provider2 = SeededRandomProvider::new(42);
        let value2_1: u64 = provider2.random();
        let value2_2: u64 = provider2.random();

        assert_eq!(value1_1, value2_1);
        assert_eq!(value1_2, value2_2);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let provider1 = SeededRandomProvider::new(1);
        let provider2 = SeededRandomProvider::new(2);

        let values1: Vec<u64> = (0..4).map(|_| provider1.random()).collect();
        let values2: Vec<u64> = (0..4).map(|_| provider2.random()).collect();

        assert_ne!(values1, values2);
    }

    #[test]
    fn test_clone_forks_engine_state() {
        let original = SeededRandomProvider::new(7);
        let _burned: u64 = original.random();

        let fork = original.clone();

        // Both continue from the same point, independently
        let from_original: u64 = original.random();
        let from_fork: u64 = fork.random();
        assert_eq!(from_original, from_fork);
    }

    #[test]
    fn test_draws_are_not_constant() {
        let provider = SeededRandomProvider::new(99);
        let values: Vec<u64> = (0..8).map(|_| provider.random()).collect();

        assert!(values.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
