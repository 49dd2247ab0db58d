//! Human-readable text output

use crate::stats::{Document, RegionValue};
use std::fmt::Write;

/// Print a fixture summary to console
///
/// Displays:
/// - Grid and axis dimensions
/// - Grid-wide aggregate (max of maxes, sum of averages)
/// - The hottest cell by threshold
pub fn print_summary(doc: &Document) {
    print!("{}", render_summary(doc));
}

/// Render the fixture summary as text
pub fn render_summary(doc: &Document) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "═══════════════════════════════════════════════════════════");
    let _ = writeln!(out, "                    FIXTURE SUMMARY");
    let _ = writeln!(out, "═══════════════════════════════════════════════════════════");
    let _ = writeln!(out);

    let _ = writeln!(out, "Grid: {} rows x {} cols ({} cells)",
                     doc.rows(), doc.cols(), format_number(doc.cells().count() as u64));
    let _ = writeln!(out, "Keys: {}", doc.keys.len());
    let _ = writeln!(out, "Times: {}", doc.times.len());
    if doc.rows() > 0 && doc.times.len() != doc.cols() {
        let _ = writeln!(out, "  Note: time axis has {} entries for {} columns",
                         doc.times.len(), doc.cols());
    }
    let _ = writeln!(out);

    if doc.cells().next().is_none() {
        let _ = writeln!(out, "No cells.");
        return out;
    }

    let total = doc.aggregate();
    let _ = writeln!(out, "Max (peak per counter):");
    write_region(&mut out, &total.max);
    let _ = writeln!(out, "Average (summed over cells):");
    write_region(&mut out, &total.average);

    if let Some((row, col, unit)) = doc.peak() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Hottest cell: row {}, col {} ({})",
                         row, col, format_bytes(unit.threshold()));
    }

    out
}

fn write_region(out: &mut String, value: &RegionValue) {
    let _ = writeln!(out, "  Read:    {} keys ({})",
                     format_number(value.read_keys), format_bytes(value.read_bytes));
    let _ = writeln!(out, "  Written: {} keys ({})",
                     format_number(value.written_keys), format_bytes(value.written_bytes));
}

/// Format a number with thousands separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// Format bytes with appropriate units
fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
