//! heatmock - Mock heatmap fixture generator
//!
//! Produces the JSON fixture the key visualizer frontend loads in place of a
//! live backend: a grid of per-region read/write statistics plus the key and
//! time axes that label it.
//!
//! # Architecture
//!
//! - **Generator**: seedable, single-pass sampling of the stat unit grid
//! - **Fixed time axis**: the stock 21 timestamps, or an opt-in generated axis
//! - **Config layering**: defaults, then TOML, then CLI flags
//! - **Verification**: read a fixture back and check its invariants

pub mod config;
pub mod distribution;
pub mod generator;
pub mod output;
pub mod stats;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use generator::Generator;
pub use stats::{Document, RegionValue, StatUnit};

/// Result type used throughout heatmock
pub type Result<T> = anyhow::Result<T>;
