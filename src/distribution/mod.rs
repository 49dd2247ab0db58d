//! Random value sources
//!
//! This module provides the random source the generator draws counter values
//! from. Every draw is an integer in the closed range `[0, max]`.
//!
//! # Sources
//!
//! - **Uniform**: Equal probability for every value in range (the only source
//!   fixtures are generated with)
//!
//! # Example
//!
//! ```
//! use heatmock::distribution::{Distribution, uniform::UniformDistribution};
//!
//! let mut dist = UniformDistribution::with_seed(7);
//! let value = dist.next_value(1_000_000); // Random value in [0, 1_000_000]
//! assert!(value <= 1_000_000);
//! ```

/// Distribution trait for counter generation
///
/// Implementations own their PRNG state and are advanced sequentially; the
/// sequence of draws is the only state shared between successive calls.
pub trait Distribution: Send {
    /// Generate the next value within `[0, max]`
    ///
    /// Both ends are inclusive, so `next_value(0)` always returns 0.
    fn next_value(&mut self, max: u64) -> u64;
}

pub mod uniform;
