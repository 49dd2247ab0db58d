//! heatmock CLI entry point

use anyhow::{Context, Result};
use heatmock::config::cli::{Cli, ExecutionMode};
use heatmock::config::{toml::build_config, validator::validate_config, Config};
use heatmock::output::text::print_summary;
use heatmock::util::{logging, verification};
use std::time::Instant;
use tracing::debug;

fn main() -> Result<()> {
    let main_start = Instant::now();

    let cli = Cli::parse_args();
    logging::init_logging(cli.debug)?;
    cli.validate()?;

    let config = build_config(&cli)?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!(elapsed_ms = main_start.elapsed().as_millis() as u64, "configuration ready");

    match cli.mode {
        ExecutionMode::Generate => run_generate(&cli, &config, main_start),
        ExecutionMode::Verify => run_verify(&config),
    }
}

/// Generate a fixture and write it to the configured path
fn run_generate(cli: &Cli, config: &Config, main_start: Instant) -> Result<()> {
    if cli.dry_run {
        print!("{}", config);
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let doc = heatmock::generator::run(config)?;
    debug!(elapsed_ms = main_start.elapsed().as_millis() as u64, "generation complete");

    if cli.summary {
        print_summary(&doc);
    }

    Ok(())
}

/// Read a fixture back and report invariant violations
fn run_verify(config: &Config) -> Result<()> {
    let path = &config.output.path;
    let (doc, violations) = verification::verify_file(
        path,
        &config.bounds,
        config.times.axis,
        config.grid.cols,
    )?;

    if violations.is_empty() {
        println!(
            "{}: OK ({} rows x {} cols, {} keys, {} times)",
            path.display(),
            doc.rows(),
            doc.cols(),
            doc.keys.len(),
            doc.times.len()
        );
        return Ok(());
    }

    for violation in &violations {
        eprintln!("  {}", violation);
    }
    anyhow::bail!(
        "{}: {} violation(s) found",
        path.display(),
        violations.len()
    )
}
