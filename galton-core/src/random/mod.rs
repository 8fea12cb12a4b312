//! Random value provider abstraction.
//!
//! This module provides a provider pattern for random value generation so
//! that code drawing random values can run against OS entropy in production
//! and against a fixed seed in tests, without changing shape.

use rand::distr::{Distribution, StandardUniform};
use rand::prelude::*;
use std::cell::RefCell;

pub mod seeded;

/// Provider trait for uniform random value generation.
///
/// This trait abstracts the source of randomness to enable both
/// entropy-seeded production draws and deterministic test draws in a
/// unified way. Implementations own their engine; nothing here touches
/// ambient or global generator state.
pub trait RandomProvider: Clone {
    /// Generate a uniformly distributed random value of type T.
    ///
    /// For integer types every representable value is equally likely.
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>;
}

/// Production random provider seeded once from the operating system.
///
/// Construction acquires seed material from the OS entropy source and
/// initializes a 64-bit pseudo-random engine with it. The engine lives
/// inside the provider; each program run constructs a fresh one, so no
/// generator state survives across invocations.
///
/// # Panics
///
/// [`OsRandomProvider::new`] panics when the OS entropy source is
/// unavailable. There is no recovery path; the failure propagates.
///
/// # Example
///
/// ```rust
/// use galton_core::{OsRandomProvider, RandomProvider};
///
/// let random = OsRandomProvider::new();
/// let value: u64 = random.random();
/// ```
#[derive(Clone, Debug)]
pub struct OsRandomProvider {
    rng: RefCell<StdRng>,
}

impl OsRandomProvider {
    /// Create a provider with a freshly entropy-seeded engine.
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_os_rng()),
        }
    }
}

impl Default for OsRandomProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomProvider for OsRandomProvider {
    fn random<T>(&self) -> T
    where
        StandardUniform: Distribution<T>,
    {
        self.rng.borrow_mut().random()
    }
}
