//! Uniform random distribution
//!
//! All values in `[0, max]` have equal probability. Uses the xoshiro256++
//! PRNG, which is fast and seedable, so a fixture can be regenerated exactly
//! from its seed.
//!
//! # Example
//!
//! ```
//! use heatmock::distribution::{Distribution, uniform::UniformDistribution};
//!
//! let mut dist = UniformDistribution::new();
//!
//! for _ in 0..10 {
//!     let value = dist.next_value(100_000);
//!     assert!(value <= 100_000);
//! }
//! ```

use super::Distribution;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform random distribution
pub struct UniformDistribution {
    rng: Xoshiro256PlusPlus,
}

impl UniformDistribution {
    /// Create a new uniform distribution with random seed
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create a new uniform distribution with specific seed
    ///
    /// Useful for reproducible fixtures and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Create from an optional seed, falling back to entropy
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for UniformDistribution {
    fn default() -> Self {
        Self::new()
    }
}

impl Distribution for UniformDistribution {
    #[inline(always)]
    fn next_value(&mut self, max: u64) -> u64 {
        self.rng.gen_range(0..=max)
    }
}
