//! Fixture generation
//!
//! Builds a [`Document`] in a single sequential pass:
//!
//! 1. `rows x cols` stat units, row-major, each with an independently sampled
//!    `max` and `average` [`RegionValue`]
//! 2. `rows + 1` keys, `"0"` through `"rows"`
//! 3. the time axis (fixed by default, see [`times`])
//!
//! All randomness comes from one [`Distribution`] owned by the [`Generator`],
//! so a seeded generator always yields the same document.
//!
//! # Example
//!
//! ```
//! use heatmock::generator::Generator;
//!
//! let mut generator = Generator::with_seed(42);
//! let doc = generator.document(2, 1);
//!
//! assert_eq!(doc.data.len(), 2);
//! assert_eq!(doc.keys, ["0", "1", "2"]);
//! assert_eq!(doc.times.len(), 21);
//! ```

pub mod times;

use crate::config::{BoundsConfig, Config, TimeAxis};
use crate::distribution::uniform::UniformDistribution;
use crate::distribution::Distribution;
use crate::output::json::write_document;
use crate::stats::{Document, RegionValue, Row, StatUnit};
use crate::Result;
use anyhow::Context;
use chrono::DateTime;
use std::path::Path;
use tracing::{debug, info};

/// Random fixture generator
pub struct Generator<D: Distribution = UniformDistribution> {
    dist: D,
    bounds: BoundsConfig,
}

impl Generator<UniformDistribution> {
    /// Generator with default bounds and an entropy-seeded source
    pub fn new() -> Self {
        Self::with_distribution(UniformDistribution::new(), BoundsConfig::default())
    }

    /// Generator with default bounds and a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_distribution(UniformDistribution::with_seed(seed), BoundsConfig::default())
    }

    /// Generator for a complete configuration
    pub fn from_config(config: &Config) -> Self {
        Self::with_distribution(
            UniformDistribution::from_seed_opt(config.random.seed),
            config.bounds.clone(),
        )
    }
}

impl Default for Generator<UniformDistribution> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Distribution> Generator<D> {
    /// Generator over an arbitrary random source
    pub fn with_distribution(dist: D, bounds: BoundsConfig) -> Self {
        Self { dist, bounds }
    }

    /// Draw a `(keys, bytes)` pair for bound `n`
    ///
    /// `keys` is uniform in `[0, n]`; `bytes` is `keys` plus a second,
    /// independent draw from `[0, n]`, so `keys <= bytes <= 2n`.
    pub fn rand_key_bytes(&mut self, n: u64) -> (u64, u64) {
        let keys = self.dist.next_value(n);
        let bytes = keys + self.dist.next_value(n);
        (keys, bytes)
    }

    /// Sample one region's read and written counters
    pub fn region_value(&mut self) -> RegionValue {
        let (read_keys, read_bytes) = self.rand_key_bytes(self.bounds.read);
        let (written_keys, written_bytes) = self.rand_key_bytes(self.bounds.written);
        RegionValue::new(read_keys, read_bytes, written_keys, written_bytes)
    }

    /// Sample a stat unit; `max` and `average` are drawn independently
    pub fn stat_unit(&mut self) -> StatUnit {
        let max = self.region_value();
        let average = self.region_value();
        StatUnit::new(max, average)
    }

    /// Sample a `rows x cols` grid in row-major order
    pub fn grid(&mut self, rows: usize, cols: usize) -> Vec<Row> {
        (0..rows)
            .map(|_| (0..cols).map(|_| self.stat_unit()).collect())
            .collect()
    }

    /// Build a document with the fixed time axis
    pub fn document(&mut self, rows: usize, cols: usize) -> Document {
        let data = self.grid(rows, cols);
        Document {
            data,
            keys: generate_keys(rows),
            times: times::fixed_times(cols),
        }
    }
}

/// Row boundary keys `"0"` through `"n"`
pub fn generate_keys(n: usize) -> Vec<String> {
    (0..=n).map(|i| i.to_string()).collect()
}

/// Build the document a configuration describes
pub fn build_document(config: &Config) -> Result<Document> {
    let rows = config.grid.rows;
    let cols = config.grid.cols;

    let mut generator = Generator::from_config(config);
    let mut doc = generator.document(rows, cols);

    if config.times.axis == TimeAxis::Generated {
        let end = match config.times.end {
            Some(ref end) => DateTime::parse_from_rfc3339(end)
                .with_context(|| format!("Invalid time axis end: {}", end))?,
            None => times::now(),
        };
        doc.times = times::generated_times(cols, end)?;
    }

    debug!(
        rows = doc.rows(),
        cols,
        keys = doc.keys.len(),
        times = doc.times.len(),
        axis = %config.times.axis,
        "built document"
    );
    if config.times.axis == TimeAxis::Fixed && cols != doc.times.len() {
        debug!(cols, times = doc.times.len(), "fixed time axis length differs from column count");
    }

    Ok(doc)
}

/// Build the document for `config` and write it to the configured path
pub fn run(config: &Config) -> Result<Document> {
    let doc = build_document(config)?;
    write_document(&config.output.path, &doc, config.output.pretty)?;

    info!(
        path = %config.output.path.display(),
        rows = doc.rows(),
        cols = config.grid.cols,
        "wrote fixture"
    );
    Ok(doc)
}

/// Generate the stock-shaped fixture of `rows x cols` into `path`
///
/// Entropy-seeded, default bounds, fixed time axis, indented JSON.
pub fn generate(rows: usize, cols: usize, path: &Path) -> Result<Document> {
    let doc = Generator::new().document(rows, cols);
    write_document(path, &doc, true)?;
    Ok(doc)
}
