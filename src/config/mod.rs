//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! Every field has a default, and the defaults describe the stock fixture: a
//! 20 x 40 grid with read counters bounded by 1,000,000 and written counters
//! by 100,000, the fixed 21-entry time axis, pretty JSON in `mock.json`.

pub mod cli;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Default number of grid rows
pub const DEFAULT_ROWS: usize = 20;
/// Default number of grid columns
pub const DEFAULT_COLS: usize = 40;
/// Default bound for read key/byte sampling
pub const DEFAULT_READ_BOUND: u64 = 1_000_000;
/// Default bound for written key/byte sampling
pub const DEFAULT_WRITTEN_BOUND: u64 = 100_000;
/// Default fixture file name
pub const DEFAULT_OUTPUT: &str = "mock.json";

/// Complete generator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub bounds: BoundsConfig,
    #[serde(default)]
    pub random: RandomConfig,
    #[serde(default)]
    pub times: TimesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Grid dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of key ranges (rows)
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Number of time windows (columns)
    #[serde(default = "default_cols")]
    pub cols: usize,
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_cols() -> usize {
    DEFAULT_COLS
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
        }
    }
}

/// Upper bounds for the key/byte pair sampler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundsConfig {
    /// Bound for read_keys (read_bytes may reach twice this)
    #[serde(default = "default_read_bound")]
    pub read: u64,
    /// Bound for written_keys (written_bytes may reach twice this)
    #[serde(default = "default_written_bound")]
    pub written: u64,
}

fn default_read_bound() -> u64 {
    DEFAULT_READ_BOUND
}

fn default_written_bound() -> u64 {
    DEFAULT_WRITTEN_BOUND
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            read: default_read_bound(),
            written: default_written_bound(),
        }
    }
}

/// Random source configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Seed for reproducible output; entropy when unset
    pub seed: Option<u64>,
}

/// Source of the `times` axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeAxis {
    /// The 21 literal timestamps, whatever the column count
    #[default]
    Fixed,
    /// `cols + 1` timestamps one minute apart
    Generated,
}

/// Time axis configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimesConfig {
    #[serde(default)]
    pub axis: TimeAxis,
    /// Last timestamp of a generated axis (RFC 3339); now when unset
    pub end: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Fixture path, overwritten if it exists
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Indented (true) or single-line (false) JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: default_pretty(),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Grid: {}", self.grid)?;
        writeln!(f, "  Bounds: {}", self.bounds)?;
        match self.random.seed {
            Some(seed) => writeln!(f, "  Seed: {}", seed)?,
            None => writeln!(f, "  Seed: entropy")?,
        }
        writeln!(f, "  Times: {}", self.times)?;
        writeln!(f, "  Output: {}", self.output)?;
        Ok(())
    }
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows x {} cols", self.rows, self.cols)
    }
}

impl fmt::Display for BoundsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "read<={}, written<={}", self.read, self.written)
    }
}

impl fmt::Display for TimeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeAxis::Fixed => write!(f, "fixed"),
            TimeAxis::Generated => write!(f, "generated"),
        }
    }
}

impl fmt::Display for TimesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.axis)?;
        if let Some(ref end) = self.end {
            write!(f, ", end={}", end)?;
        }
        Ok(())
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.path.display(),
            if self.pretty { "pretty" } else { "compact" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_describe_stock_fixture() {
        let config = Config::default();
        assert_eq!(config.grid.rows, 20);
        assert_eq!(config.grid.cols, 40);
        assert_eq!(config.bounds.read, 1_000_000);
        assert_eq!(config.bounds.written, 100_000);
        assert_eq!(config.random.seed, None);
        assert_eq!(config.times.axis, TimeAxis::Fixed);
        assert_eq!(config.output.path, PathBuf::from("mock.json"));
        assert!(config.output.pretty);
    }

    #[test]
    fn test_display() {
        let text = Config::default().to_string();
        assert!(text.contains("20 rows x 40 cols"));
        assert!(text.contains("read<=1000000, written<=100000"));
        assert!(text.contains("Seed: entropy"));
        assert!(text.contains("mock.json (pretty)"));
    }
}
