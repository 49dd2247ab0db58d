//! Fixture verification
//!
//! Reads a fixture back and checks the invariants generation guarantees:
//!
//! - every counter pair has `bytes >= keys`
//! - `keys <= bound` and `bytes <= 2 * bound` for the configured bounds
//! - `data` is rectangular
//! - `keys` is `"0"` through `"rows"`
//! - `times` is the fixed axis (fixed mode) or has `cols + 1` entries
//!   (generated mode)
//!
//! All violations are collected rather than stopping at the first one.

use crate::config::{BoundsConfig, TimeAxis};
use crate::generator::times::FIXED_TIMES;
use crate::output::json::read_document;
use crate::stats::{Document, RegionValue};
use crate::Result;
use std::path::Path;

/// A broken fixture invariant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A byte counter is smaller than its key counter
    #[error("cell [{row}][{col}] {unit}.{counter}: bytes {bytes} < keys {keys}")]
    BytesBelowKeys {
        row: usize,
        col: usize,
        unit: &'static str,
        counter: &'static str,
        keys: u64,
        bytes: u64,
    },

    /// A counter exceeds what the sampler can produce
    #[error("cell [{row}][{col}] {unit}.{counter}: {value} exceeds limit {limit}")]
    OutOfBounds {
        row: usize,
        col: usize,
        unit: &'static str,
        counter: &'static str,
        value: u64,
        limit: u64,
    },

    /// A row has a different length than the first row
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    /// The key axis has the wrong length
    #[error("keys has {len} entries, expected {expected}")]
    KeyCount { len: usize, expected: usize },

    /// A key is not its own index
    #[error("keys[{index}] is {found:?}, expected {expected:?}")]
    KeyMismatch { index: usize, found: String, expected: String },

    /// The time axis does not match the configured source
    #[error("times: {0}")]
    Times(String),
}

/// Check a document against the fixture invariants
///
/// `grid_cols` is the configured column count. It is only consulted when the
/// grid has no rows, since the column count cannot be read from `data` then.
pub fn verify_document(
    doc: &Document,
    bounds: &BoundsConfig,
    axis: TimeAxis,
    grid_cols: usize,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    let expected_cols = doc.cols();
    for (row, cells) in doc.data.iter().enumerate() {
        if cells.len() != expected_cols {
            violations.push(Violation::RaggedRow {
                row,
                len: cells.len(),
                expected: expected_cols,
            });
        }

        for (col, unit) in cells.iter().enumerate() {
            check_region(&mut violations, row, col, "max", &unit.max, bounds);
            check_region(&mut violations, row, col, "average", &unit.average, bounds);
        }
    }

    let expected_keys = doc.rows() + 1;
    if doc.keys.len() != expected_keys {
        violations.push(Violation::KeyCount {
            len: doc.keys.len(),
            expected: expected_keys,
        });
    }
    for (index, key) in doc.keys.iter().enumerate() {
        let expected = index.to_string();
        if *key != expected {
            violations.push(Violation::KeyMismatch {
                index,
                found: key.clone(),
                expected,
            });
        }
    }

    match axis {
        TimeAxis::Fixed => {
            if doc.times != FIXED_TIMES {
                violations.push(Violation::Times(format!(
                    "expected the fixed {}-entry axis",
                    FIXED_TIMES.len()
                )));
            }
        }
        TimeAxis::Generated => {
            let cols = if doc.data.is_empty() { grid_cols } else { expected_cols };
            if doc.times.len() != cols.saturating_add(1) {
                violations.push(Violation::Times(format!(
                    "{} entries, expected {}",
                    doc.times.len(),
                    cols.saturating_add(1)
                )));
            }
        }
    }

    violations
}

/// Read and check a fixture file
pub fn verify_file(
    path: &Path,
    bounds: &BoundsConfig,
    axis: TimeAxis,
    grid_cols: usize,
) -> Result<(Document, Vec<Violation>)> {
    let doc = read_document(path)?;
    let violations = verify_document(&doc, bounds, axis, grid_cols);
    Ok((doc, violations))
}

fn check_region(
    violations: &mut Vec<Violation>,
    row: usize,
    col: usize,
    unit: &'static str,
    value: &RegionValue,
    bounds: &BoundsConfig,
) {
    check_pair(violations, row, col, unit, "read", value.read_keys, value.read_bytes, bounds.read);
    check_pair(violations, row, col, unit, "written", value.written_keys, value.written_bytes, bounds.written);
}

#[allow(clippy::too_many_arguments)]
fn check_pair(
    violations: &mut Vec<Violation>,
    row: usize,
    col: usize,
    unit: &'static str,
    counter: &'static str,
    keys: u64,
    bytes: u64,
    bound: u64,
) {
    if bytes < keys {
        violations.push(Violation::BytesBelowKeys { row, col, unit, counter, keys, bytes });
    }
    if keys > bound {
        violations.push(Violation::OutOfBounds { row, col, unit, counter, value: keys, limit: bound });
    }
    let bytes_limit = bound.saturating_mul(2);
    if bytes > bytes_limit {
        violations.push(Violation::OutOfBounds { row, col, unit, counter, value: bytes, limit: bytes_limit });
    }
}
