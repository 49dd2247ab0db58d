//! CLI argument parsing using clap
//!
//! Every generation option is optional: an unset flag falls through to the
//! TOML file (if any) and then to the built-in defaults, so running with no
//! arguments produces the stock 20 x 40 fixture in `mock.json`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Execution mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExecutionMode {
    /// Generate a fixture file (default)
    Generate,
    /// Read a fixture file back and check its invariants
    Verify,
}

/// Time axis source
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeAxisArg {
    /// The 21 literal timestamps
    Fixed,
    /// One timestamp per column boundary, one minute apart
    Generated,
}

/// heatmock - mock heatmap fixture generator
#[derive(Parser, Debug)]
#[command(name = "heatmock")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Execution mode: generate or verify
    #[arg(long, value_enum, default_value = "generate")]
    pub mode: ExecutionMode,

    /// Number of grid rows (key ranges)
    #[arg(short = 'r', long)]
    pub rows: Option<usize>,

    /// Number of grid columns (time windows)
    #[arg(short = 'c', long)]
    pub cols: Option<usize>,

    /// Fixture path to write (or read, in verify mode)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Seed the random source for reproducible output
    #[arg(long, env = "HEATMOCK_SEED")]
    pub seed: Option<u64>,

    /// Upper bound for read_keys sampling
    #[arg(long)]
    pub read_bound: Option<u64>,

    /// Upper bound for written_keys sampling
    #[arg(long)]
    pub written_bound: Option<u64>,

    /// Time axis source
    #[arg(long, value_enum)]
    pub time_axis: Option<TimeAxisArg>,

    /// Last timestamp of a generated time axis (RFC 3339)
    #[arg(long, value_name = "RFC3339")]
    pub time_end: Option<String>,

    /// Write single-line JSON instead of indented
    #[arg(long)]
    pub compact: bool,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a text summary of the generated grid
    #[arg(long)]
    pub summary: bool,

    /// Dry run - validate and print configuration without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    ///
    /// Only checks combinations clap cannot express; value checks that also
    /// apply to TOML input live in [`crate::config::validator`].
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.mode == ExecutionMode::Verify {
            if self.dry_run {
                anyhow::bail!("--dry-run has no effect in verify mode");
            }
            if self.compact {
                anyhow::bail!("--compact has no effect in verify mode");
            }
        }

        if self.time_end.is_some() && self.time_axis == Some(TimeAxisArg::Fixed) {
            anyhow::bail!("--time-end requires --time-axis generated");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_stock_invocation() {
        let cli = Cli::try_parse_from(["heatmock"]).unwrap();
        assert_eq!(cli.mode, ExecutionMode::Generate);
        assert!(cli.rows.is_none());
        assert!(cli.cols.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.compact);
        cli.validate().unwrap();
    }

    #[test]
    fn test_parse_generation_flags() {
        let cli = Cli::try_parse_from([
            "heatmock", "-r", "2", "-c", "1", "-o", "out.json", "--seed", "7",
            "--time-axis", "generated", "--compact",
        ])
        .unwrap();

        assert_eq!(cli.rows, Some(2));
        assert_eq!(cli.cols, Some(1));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.time_axis, Some(TimeAxisArg::Generated));
        assert!(cli.compact);
    }

    #[test]
    fn test_rejects_negative_rows() {
        assert!(Cli::try_parse_from(["heatmock", "--rows", "-1"]).is_err());
    }

    #[test]
    fn test_validate_time_end_with_fixed_axis() {
        let cli = Cli::try_parse_from([
            "heatmock", "--time-axis", "fixed", "--time-end", "2019-10-25T23:05:01+08:00",
        ])
        .unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_verify_mode_flags() {
        let cli = Cli::try_parse_from(["heatmock", "--mode", "verify", "--compact"]).unwrap();
        assert!(cli.validate().is_err());

        let cli = Cli::try_parse_from(["heatmock", "--mode", "verify", "-o", "x.json"]).unwrap();
        assert!(cli.validate().is_ok());
    }
}
