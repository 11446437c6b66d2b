//! Random suffix generation for short links.
//!
//! Suffixes are 7 characters drawn uniformly from `[a-zA-Z0-9]`. The generator
//! owns its random source so it can be seeded in tests; uniqueness is the
//! caller's problem.

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Number of characters in a generated suffix.
pub const SUFFIX_LENGTH: usize = 7;

/// Source of candidate suffixes.
#[cfg_attr(test, mockall::automock)]
pub trait GenerateSuffix: Send + Sync {
    /// Produces a new candidate suffix, independent of previous calls.
    fn generate(&self) -> String;
}

/// Alphanumeric suffix generator backed by a [`StdRng`].
pub struct SuffixGenerator {
    rng: Mutex<StdRng>,
}

impl SuffixGenerator {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for SuffixGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerateSuffix for SuffixGenerator {
    fn generate(&self) -> String {
        // A poisoned lock still holds a usable RNG.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..SUFFIX_LENGTH)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect()
    }
}

/// Returns true if `suffix` has the shape of a generated suffix.
pub fn is_generated_shape(suffix: &str) -> bool {
    suffix.len() == SUFFIX_LENGTH && suffix.chars().all(|c| c.is_ascii_alphanumeric())
}
