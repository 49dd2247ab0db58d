//! Configuration validation

use super::*;
use crate::generator::times::MAX_GENERATED_COLS;
use anyhow::{Context, Result};

/// Validate complete configuration
///
/// Grid dimensions are not range-checked: zero rows or columns is a valid
/// (empty) fixture.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_bounds(&config.bounds)?;
    validate_times(&config.times)?;
    validate_grid(&config.grid, &config.times)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate sampler bounds
pub fn validate_bounds(bounds: &BoundsConfig) -> Result<()> {
    if bounds.read == 0 {
        anyhow::bail!("bounds.read must be greater than 0");
    }
    if bounds.written == 0 {
        anyhow::bail!("bounds.written must be greater than 0");
    }

    // bytes = keys + extra, both drawn from [0, bound]
    if bounds.read.checked_mul(2).is_none() || bounds.written.checked_mul(2).is_none() {
        anyhow::bail!("bounds must not exceed {} (byte counters would overflow)", u64::MAX / 2);
    }

    Ok(())
}

/// Validate time axis configuration
pub fn validate_times(times: &TimesConfig) -> Result<()> {
    if let Some(ref end) = times.end {
        if times.axis != TimeAxis::Generated {
            anyhow::bail!("times.end is only used with the generated time axis");
        }
        chrono::DateTime::parse_from_rfc3339(end)
            .with_context(|| format!("times.end is not an RFC 3339 timestamp: {}", end))?;
    }

    Ok(())
}

/// Validate grid dimensions against the time axis
///
/// Only the generated axis limits the column count; it emits one timestamp per
/// column boundary.
pub fn validate_grid(grid: &GridConfig, times: &TimesConfig) -> Result<()> {
    if times.axis == TimeAxis::Generated && grid.cols > MAX_GENERATED_COLS {
        anyhow::bail!(
            "cols must be at most {} with the generated time axis, got {}",
            MAX_GENERATED_COLS,
            grid.cols
        );
    }

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if output.path.as_os_str().is_empty() {
        anyhow::bail!("output path must not be empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        validate_config(&Config::default()).unwrap();
    }

    #[test]
    fn test_empty_grid_is_valid() {
        let mut config = Config::default();
        config.grid = GridConfig { rows: 0, cols: 0 };
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_zero_bounds_rejected() {
        let mut config = Config::default();
        config.bounds.read = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.bounds.written = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_overflowing_bounds_rejected() {
        let mut config = Config::default();
        config.bounds.read = u64::MAX;
        assert!(validate_config(&config).is_err());

        config.bounds.read = u64::MAX / 2;
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_time_end_requires_generated_axis() {
        let mut config = Config::default();
        config.times.end = Some("2019-10-25T23:05:01+08:00".to_string());
        assert!(validate_config(&config).is_err());

        config.times.axis = TimeAxis::Generated;
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_time_end_must_parse() {
        let mut config = Config::default();
        config.times.axis = TimeAxis::Generated;
        config.times.end = Some("yesterday".to_string());

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("RFC 3339"));
    }

    #[test]
    fn test_generated_axis_column_limit() {
        let mut config = Config::default();
        config.grid.cols = MAX_GENERATED_COLS + 1;
        // Fixed axis ignores the column count
        validate_config(&config).unwrap();

        config.times.axis = TimeAxis::Generated;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("generated time axis"));

        config.grid.cols = MAX_GENERATED_COLS;
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let mut config = Config::default();
        config.output.path = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }
}
