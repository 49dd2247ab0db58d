//! Region statistics data model
//!
//! The shapes serialized into a heatmap fixture. A fixture is a [`Document`]:
//! a grid of [`StatUnit`]s, one per (key range, time window) cell, plus the
//! key and time axes that delimit the grid.
//!
//! - **RegionValue**: read/written key and byte counters for one region
//! - **StatUnit**: a `max` and an `average` RegionValue for one cell
//! - **Document**: `{ data, keys, times }`, the fixture file contents
//!
//! # Aggregation
//!
//! [`StatUnit`] carries the same merge/split rules the serving backend applies
//! when it compacts cells: `max` counters merge by maximum, `average` counters
//! merge by sum and are divided back out on split.
//!
//! # Example
//!
//! ```
//! use heatmock::stats::{RegionValue, StatUnit};
//!
//! let mut a = StatUnit::new(RegionValue::new(10, 20, 1, 2), RegionValue::new(4, 8, 1, 1));
//! let b = StatUnit::new(RegionValue::new(5, 50, 3, 3), RegionValue::new(2, 2, 2, 2));
//!
//! a.merge(&b);
//! assert_eq!(a.max.read_bytes, 50);
//! assert_eq!(a.average.read_keys, 6);
//! assert_eq!(a.threshold(), 50);
//! ```

use serde::{Deserialize, Serialize};

/// One row of the grid
pub type Row = Vec<StatUnit>;

/// Read/write traffic counters for a region
///
/// Generated values always satisfy `read_bytes >= read_keys` and
/// `written_bytes >= written_keys`. Values read back from disk are not trusted;
/// see [`crate::util::verification`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionValue {
    pub read_keys: u64,
    pub read_bytes: u64,
    pub written_keys: u64,
    pub written_bytes: u64,
}

impl RegionValue {
    pub fn new(read_keys: u64, read_bytes: u64, written_keys: u64, written_bytes: u64) -> Self {
        Self {
            read_keys,
            read_bytes,
            written_keys,
            written_bytes,
        }
    }

    /// Element-wise maximum
    fn max_with(&mut self, other: &RegionValue) {
        self.read_keys = self.read_keys.max(other.read_keys);
        self.read_bytes = self.read_bytes.max(other.read_bytes);
        self.written_keys = self.written_keys.max(other.written_keys);
        self.written_bytes = self.written_bytes.max(other.written_bytes);
    }

    /// Element-wise sum, saturating at `u64::MAX`
    fn add(&mut self, other: &RegionValue) {
        self.read_keys = self.read_keys.saturating_add(other.read_keys);
        self.read_bytes = self.read_bytes.saturating_add(other.read_bytes);
        self.written_keys = self.written_keys.saturating_add(other.written_keys);
        self.written_bytes = self.written_bytes.saturating_add(other.written_bytes);
    }

    fn div(&mut self, count: u64) {
        self.read_keys /= count;
        self.read_bytes /= count;
        self.written_keys /= count;
        self.written_bytes /= count;
    }
}

/// Aggregate statistics for one heatmap cell
///
/// No relation is enforced between `max` and `average`: the mock generator
/// samples them independently, so `average` may exceed `max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatUnit {
    pub max: RegionValue,
    pub average: RegionValue,
}

impl StatUnit {
    pub fn new(max: RegionValue, average: RegionValue) -> Self {
        Self { max, average }
    }

    /// Fold another unit into this one
    ///
    /// `max` takes the element-wise maximum, `average` accumulates the sum.
    pub fn merge(&mut self, other: &StatUnit) {
        self.max.max_with(&other.max);
        self.average.add(&other.average);
    }

    /// Copy of this unit with `average` divided across `count` cells
    ///
    /// A zero count returns the unit unchanged.
    pub fn split(&self, count: u64) -> StatUnit {
        let mut res = *self;
        if count > 0 {
            res.average.div(count);
        }
        res
    }

    /// Peak byte rate of the cell, read or written
    pub fn threshold(&self) -> u64 {
        self.max.read_bytes.max(self.max.written_bytes)
    }

    /// True when the cell's peak byte rate is under `threshold`
    pub fn is_below(&self, threshold: u64) -> bool {
        self.threshold() < threshold
    }
}

/// A complete heatmap fixture
///
/// `data` is row-major: `data[i][j]` is the cell for key range `i` and time
/// window `j`. `keys` holds the row boundaries (one more than the number of
/// rows). `times` is the column axis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub data: Vec<Row>,
    pub keys: Vec<String>,
    pub times: Vec<String>,
}

impl Document {
    /// Number of grid rows
    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Number of grid columns (taken from the first row)
    pub fn cols(&self) -> usize {
        self.data.first().map_or(0, |row| row.len())
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &StatUnit> {
        self.data.iter().flatten()
    }

    /// Merge every cell into a single unit
    pub fn aggregate(&self) -> StatUnit {
        let mut total = StatUnit::default();
        for unit in self.cells() {
            total.merge(unit);
        }
        total
    }

    /// Position and value of the cell with the highest threshold
    ///
    /// Ties resolve to the first cell in row-major order.
    pub fn peak(&self) -> Option<(usize, usize, &StatUnit)> {
        let mut best: Option<(usize, usize, &StatUnit)> = None;
        for (i, row) in self.data.iter().enumerate() {
            for (j, unit) in row.iter().enumerate() {
                match best {
                    Some((_, _, current)) if unit.threshold() <= current.threshold() => {}
                    _ => best = Some((i, j, unit)),
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(max: (u64, u64, u64, u64), avg: (u64, u64, u64, u64)) -> StatUnit {
        StatUnit::new(
            RegionValue::new(max.0, max.1, max.2, max.3),
            RegionValue::new(avg.0, avg.1, avg.2, avg.3),
        )
    }

    #[test]
    fn test_merge_takes_max_and_sums_average() {
        let mut a = unit((1, 10, 5, 5), (1, 2, 3, 4));
        let b = unit((2, 3, 7, 8), (10, 20, 30, 40));

        a.merge(&b);

        assert_eq!(a.max, RegionValue::new(2, 10, 7, 8));
        assert_eq!(a.average, RegionValue::new(11, 22, 33, 44));
    }

    #[test]
    fn test_merge_saturates() {
        let mut a = unit((0, 0, 0, 0), (u64::MAX, 1, 1, 1));
        let b = unit((0, 0, 0, 0), (1, 1, 1, 1));

        a.merge(&b);
        assert_eq!(a.average.read_keys, u64::MAX);
        assert_eq!(a.average.read_bytes, 2);
    }

    #[test]
    fn test_split_divides_average_only() {
        let u = unit((9, 9, 9, 9), (10, 20, 30, 41));
        let s = u.split(10);

        assert_eq!(s.max, u.max);
        assert_eq!(s.average, RegionValue::new(1, 2, 3, 4));
        // Original untouched
        assert_eq!(u.average.read_keys, 10);
    }

    #[test]
    fn test_split_zero_count() {
        let u = unit((1, 2, 3, 4), (5, 6, 7, 8));
        assert_eq!(u.split(0), u);
    }

    #[test]
    fn test_threshold() {
        assert_eq!(unit((0, 100, 0, 300), (0, 0, 0, 0)).threshold(), 300);
        assert_eq!(unit((0, 500, 0, 300), (0, 0, 0, 0)).threshold(), 500);

        let u = unit((0, 100, 0, 50), (0, 0, 0, 0));
        assert!(u.is_below(101));
        assert!(!u.is_below(100));
    }

    #[test]
    fn test_average_may_exceed_max() {
        // Nothing normalizes the pair; both sides are kept as given
        let u = unit((1, 1, 1, 1), (100, 100, 100, 100));
        let json = serde_json::to_string(&u).unwrap();
        let back: StatUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back.average.read_keys, 100);
        assert_eq!(back.max.read_keys, 1);
    }

    #[test]
    fn test_field_order_in_json() {
        let u = unit((1, 2, 3, 4), (5, 6, 7, 8));
        let json = serde_json::to_string(&u).unwrap();
        assert_eq!(
            json,
            r#"{"max":{"read_keys":1,"read_bytes":2,"written_keys":3,"written_bytes":4},"average":{"read_keys":5,"read_bytes":6,"written_keys":7,"written_bytes":8}}"#
        );

        let doc = Document::default();
        assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"data":[],"keys":[],"times":[]}"#);
    }

    #[test]
    fn test_document_dimensions_and_peak() {
        let doc = Document {
            data: vec![
                vec![unit((0, 10, 0, 0), (0, 0, 0, 0)), unit((0, 70, 0, 0), (0, 0, 0, 0))],
                vec![unit((0, 0, 0, 70), (0, 0, 0, 0)), unit((0, 5, 0, 0), (0, 0, 0, 0))],
            ],
            keys: vec!["0".into(), "1".into(), "2".into()],
            times: vec![],
        };

        assert_eq!(doc.rows(), 2);
        assert_eq!(doc.cols(), 2);
        assert_eq!(doc.cells().count(), 4);

        let (i, j, peak) = doc.peak().unwrap();
        assert_eq!((i, j), (0, 1));
        assert_eq!(peak.threshold(), 70);

        assert_eq!(doc.aggregate().max.read_bytes, 70);
        assert_eq!(doc.aggregate().max.written_bytes, 70);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::default();
        assert_eq!(doc.rows(), 0);
        assert_eq!(doc.cols(), 0);
        assert!(doc.peak().is_none());
        assert_eq!(doc.aggregate(), StatUnit::default());
    }
}
