//! Tabular storage for sensor readings
//!
//! A [`SensorTable`] holds the rows parsed from one sensor log: a time
//! column plus a fixed number of value channels per row. Tables are built
//! once by the ingestion layer and read-only afterwards; chart panels share
//! one table through an `Arc` (for example an overview viewport and a detail
//! viewport over the same recording).
//!
//! Row order is insertion order. After the reader's absolute-time conversion
//! the time column is expected to be monotonically increasing; the resampler
//! relies on that ordering.

use crate::error::{Result, WearVisError};
use crate::types::Point;

/// Immutable-after-build table of (time, values) sensor rows
#[derive(Debug, Clone)]
pub struct SensorTable {
    /// Name of the recording (usually the source file name)
    name: String,
    /// Number of value channels per row, excluding time
    column_count: usize,
    /// Time of each row
    times: Vec<f64>,
    /// Row values, flattened with stride `column_count`
    values: Vec<f64>,
}

impl SensorTable {
    /// Create an empty table with the given number of value channels
    pub fn new(name: impl Into<String>, column_count: usize) -> Self {
        assert!(column_count > 0, "a sensor table needs at least one value channel");
        Self {
            name: name.into(),
            column_count,
            times: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Append one row of readings
    ///
    /// The value slice must have exactly [`column_count`](Self::column_count)
    /// entries; a mismatch is a data-format error the ingestion layer
    /// surfaces to its caller.
    pub fn add_row(&mut self, time: f64, values: &[f64]) -> Result<()> {
        if values.len() != self.column_count {
            return Err(WearVisError::RowWidth {
                expected: self.column_count,
                actual: values.len(),
            });
        }
        self.times.push(time);
        self.values.extend_from_slice(values);
        Ok(())
    }

    /// Name of the recording
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of value channels per row (excluding time)
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Number of rows stored
    pub fn row_count(&self) -> usize {
        self.times.len()
    }

    /// Check whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the given row
    pub fn time(&self, row: usize) -> f64 {
        assert!(row < self.times.len(), "row {row} out of range");
        self.times[row]
    }

    /// Value of the given channel at the given row
    pub fn value(&self, column: usize, row: usize) -> f64 {
        assert!(column < self.column_count, "column {column} out of range");
        assert!(row < self.times.len(), "row {row} out of range");
        self.values[row * self.column_count + column]
    }

    /// Build the (time, value) point list for one channel, in row order
    pub fn column_points(&self, column: usize) -> Vec<Point> {
        assert!(column < self.column_count, "column {column} out of range");
        self.times
            .iter()
            .enumerate()
            .map(|(row, &time)| Point::new(time, self.values[row * self.column_count + column]))
            .collect()
    }

    /// Minimum and maximum time over all rows, `None` when empty
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        let first = *self.times.first()?;
        let (min, max) = self
            .times
            .iter()
            .fold((first, first), |(min, max), &t| (min.min(t), max.max(t)));
        Some((min, max))
    }

    /// Minimum and maximum value of one channel over all rows, `None` when
    /// empty
    ///
    /// This is the global per-column extent: the Y autoscale of the chart
    /// never changes with the zoom window.
    pub fn value_bounds(&self, column: usize) -> Option<(f64, f64)> {
        assert!(column < self.column_count, "column {column} out of range");
        if self.times.is_empty() {
            return None;
        }
        let first = self.values[column];
        let (min, max) = (0..self.times.len())
            .map(|row| self.values[row * self.column_count + column])
            .fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> SensorTable {
        let mut table = SensorTable::new("walk.log", 3);
        table.add_row(0.0, &[1.0, -2.0, 0.5]).unwrap();
        table.add_row(10.0, &[2.0, -1.0, 0.25]).unwrap();
        table.add_row(20.0, &[1.5, -3.0, 0.75]).unwrap();
        table
    }

    #[test]
    fn test_add_row_and_accessors() {
        let table = sample_table();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.time(1), 10.0);
        assert_eq!(table.value(1, 2), -3.0);
    }

    #[test]
    fn test_row_width_mismatch_is_an_error() {
        let mut table = SensorTable::new("bad", 3);
        let result = table.add_row(0.0, &[1.0]);
        assert!(matches!(
            result,
            Err(WearVisError::RowWidth {
                expected: 3,
                actual: 1
            })
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn test_column_points_pair_time_with_channel() {
        let table = sample_table();
        let points = table.column_points(0);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point::new(0.0, 1.0));
        assert_eq!(points[2], Point::new(20.0, 1.5));
    }

    #[test]
    fn test_bounds() {
        let table = sample_table();
        assert_eq!(table.time_bounds(), Some((0.0, 20.0)));
        assert_eq!(table.value_bounds(1), Some((-3.0, -1.0)));
    }

    #[test]
    fn test_empty_table_has_no_bounds() {
        let table = SensorTable::new("empty", 1);
        assert_eq!(table.time_bounds(), None);
        assert_eq!(table.value_bounds(0), None);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_column_panics() {
        let table = sample_table();
        let _ = table.column_points(3);
    }
}
