//! TOML configuration file parsing

use super::*;
use crate::config::cli::{Cli, TimeAxisArg};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    if let Some(rows) = cli.rows {
        config.grid.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.grid.cols = cols;
    }

    if let Some(read) = cli.read_bound {
        config.bounds.read = read;
    }
    if let Some(written) = cli.written_bound {
        config.bounds.written = written;
    }

    if cli.seed.is_some() {
        config.random.seed = cli.seed;
    }

    if let Some(axis) = cli.time_axis {
        config.times.axis = match axis {
            TimeAxisArg::Fixed => TimeAxis::Fixed,
            TimeAxisArg::Generated => TimeAxis::Generated,
        };
    }
    if let Some(ref end) = cli.time_end {
        config.times.end = Some(end.clone());
    }

    if let Some(ref path) = cli.output {
        config.output.path = path.clone();
    }
    if cli.compact {
        config.output.pretty = false;
    }

    config
}

/// Build the effective configuration for a CLI invocation
///
/// Loads `--config` when given, otherwise starts from the defaults, then
/// applies explicit CLI flags on top.
pub fn build_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    Ok(merge_cli_with_config(cli, base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config = parse_toml_string(
            r#"
            [grid]
            rows = 3
            cols = 5

            [bounds]
            read = 10
            written = 20

            [random]
            seed = 42

            [times]
            axis = "generated"
            end = "2019-10-25T23:05:01+08:00"

            [output]
            path = "fixture.json"
            pretty = false
            "#,
        )
        .unwrap();

        assert_eq!(config.grid, GridConfig { rows: 3, cols: 5 });
        assert_eq!(config.bounds, BoundsConfig { read: 10, written: 20 });
        assert_eq!(config.random.seed, Some(42));
        assert_eq!(config.times.axis, TimeAxis::Generated);
        assert_eq!(config.times.end.as_deref(), Some("2019-10-25T23:05:01+08:00"));
        assert_eq!(config.output.path, PathBuf::from("fixture.json"));
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_parse_partial_config_fills_defaults() {
        let config = parse_toml_string(
            r#"
            [grid]
            rows = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.grid.rows, 2);
        assert_eq!(config.grid.cols, DEFAULT_COLS);
        assert_eq!(config.bounds, BoundsConfig::default());
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(parse_toml_string("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_axis() {
        let err = parse_toml_string("[times]\naxis = \"hourly\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[grid]\nrows = 3\ncols = 4\n\n[random]\nseed = 1").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cli = Cli::try_parse_from([
            "heatmock", "--config", &path, "--cols", "9", "--seed", "2", "--compact",
        ])
        .unwrap();

        let config = build_config(&cli).unwrap();
        assert_eq!(config.grid.rows, 3);
        assert_eq!(config.grid.cols, 9);
        assert_eq!(config.random.seed, Some(2));
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_missing_config_file() {
        let cli = Cli::try_parse_from(["heatmock", "--config", "/nonexistent/heatmock.toml"]).unwrap();
        let err = build_config(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }
}
