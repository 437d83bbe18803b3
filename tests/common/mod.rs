//! Shared helpers for integration tests

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use wearvis_rs::SensorTable;

/// Install the tracing subscriber for test output
///
/// Respects `RUST_LOG`; later calls from other tests in the same binary are
/// no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builder for sensor tables used across the integration tests
pub struct TableBuilder {
    name: String,
    column_count: usize,
    rows: Vec<(f64, Vec<f64>)>,
}

impl TableBuilder {
    pub fn new(name: &str, column_count: usize) -> Self {
        Self {
            name: name.to_string(),
            column_count,
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, time: f64, values: &[f64]) -> Self {
        self.rows.push((time, values.to_vec()));
        self
    }

    /// A single-channel sine sweep sampled once per time unit
    pub fn sine_sweep(name: &str, rows: usize) -> Self {
        let mut builder = Self::new(name, 1);
        for i in 0..rows {
            let t = i as f64;
            builder.rows.push((t, vec![(t * 0.05).sin() * 100.0]));
        }
        builder
    }

    pub fn build(self) -> Arc<SensorTable> {
        let mut table = SensorTable::new(self.name, self.column_count);
        for (time, values) in &self.rows {
            table.add_row(*time, values).unwrap();
        }
        Arc::new(table)
    }
}

/// Write a sensor log with relative timestamps into `dir` and return its path
pub fn write_sensor_log(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{content}").unwrap();
    path
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
