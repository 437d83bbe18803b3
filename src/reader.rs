//! Sensor log ingestion
//!
//! Parses the semicolon-delimited logs produced by the wearable recorder
//! into a [`SensorTable`]. The first line is a header and is skipped. Every
//! data row is either `time;value` (single-channel sensors such as heart
//! rate) or `time;x;y;z` (triaxial sensors such as the accelerometer); the
//! first data row fixes the channel count for the whole file.
//!
//! The recorder writes relative timestamps: the first row carries an
//! absolute time and every later row the delta since the previous one. The
//! parser accumulates these into absolute times as it goes, so the resulting
//! table is monotonically increasing in time and ready for the resampler.

use std::path::Path;

use crate::error::{Result, ResultExt, WearVisError};
use crate::table::SensorTable;

/// Read and parse one sensor log file
pub fn read_sensor_log(path: impl AsRef<Path>) -> Result<SensorTable> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(WearVisError::from)
        .with_context(|| format!("failed to read sensor log {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_sensor_log(&content, &name)
}

/// Parse sensor log content
///
/// `name` labels the resulting table (callers pass the file name). Line
/// numbers in errors are 1-based and count every line of the input,
/// including the header and any blank lines.
pub fn parse_sensor_log(content: &str, name: &str) -> Result<SensorTable> {
    let mut table: Option<SensorTable> = None;
    let mut values = Vec::with_capacity(3);
    let mut elapsed = 0.0;

    // Line 1 is the header.
    for (index, line) in content.lines().enumerate().skip(1) {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        values.clear();
        let mut fields = line.split(';');
        let time_field = fields.next().unwrap_or_default();
        let delta = parse_field(time_field, line_number)?;
        for field in fields {
            values.push(parse_field(field, line_number)?);
        }

        if values.len() != 1 && values.len() != 3 {
            return Err(WearVisError::format(
                line_number,
                format!("expected 2 or 4 fields, found {}", values.len() + 1),
            ));
        }

        let table = table.get_or_insert_with(|| SensorTable::new(name, values.len()));
        if values.len() != table.column_count() {
            return Err(WearVisError::format(
                line_number,
                format!(
                    "expected {} fields like the first data row, found {}",
                    table.column_count() + 1,
                    values.len() + 1
                ),
            ));
        }

        // The first row's time is absolute; every later row carries the
        // delta since the previous one.
        elapsed = if table.is_empty() { delta } else { elapsed + delta };
        table.add_row(elapsed, &values)?;
    }

    let table = table.ok_or_else(|| {
        WearVisError::format(content.lines().count().max(1), "no data rows in sensor log")
    })?;
    tracing::debug!(
        name,
        rows = table.row_count(),
        columns = table.column_count(),
        "parsed sensor log"
    );
    Ok(table)
}

fn parse_field(field: &str, line_number: usize) -> Result<f64> {
    field.trim().parse::<f64>().map_err(|_| {
        WearVisError::format(line_number, format!("invalid number {:?}", field.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parses_single_channel_log_with_relative_times() {
        let content = "time;hr\n100.0;62\n1.0;63\n0.5;64\n";
        let table = parse_sensor_log(content, "hr.log").unwrap();

        assert_eq!(table.column_count(), 1);
        assert_eq!(table.row_count(), 3);
        // Times accumulate from the absolute first row.
        assert_eq!(table.time(0), 100.0);
        assert_eq!(table.time(1), 101.0);
        assert_eq!(table.time(2), 101.5);
        assert_eq!(table.value(0, 2), 64.0);
    }

    #[test]
    fn test_parses_triaxial_log() {
        let content = "time;x;y;z\n0.0;1;2;3\n0.1;4;5;6\n";
        let table = parse_sensor_log(content, "acc.log").unwrap();

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 2);
        assert!((table.time(1) - 0.1).abs() < 1e-12);
        assert_eq!(table.value(2, 1), 6.0);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let content = "time;hr\n0.0;62\n\n1.0;63\n";
        let table = parse_sensor_log(content, "hr.log").unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_wrong_field_count_reports_line() {
        let content = "time;x;y;z\n0.0;1;2;3\n0.1;4;5\n";
        let err = parse_sensor_log(content, "acc.log").unwrap_err();
        assert!(matches!(err, WearVisError::Format { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_unparseable_number_reports_line() {
        let content = "time;hr\n0.0;62\nabc;63\n";
        let err = parse_sensor_log(content, "hr.log").unwrap_err();
        assert!(matches!(err, WearVisError::Format { line: 3, .. }), "{err}");
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_header_only_is_an_error() {
        let err = parse_sensor_log("time;hr\n", "hr.log").unwrap_err();
        assert!(matches!(err, WearVisError::Format { .. }));
    }

    #[test]
    fn test_read_sensor_log_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "time;hr\n0.0;60\n1.0;61\n").unwrap();

        let table = read_sensor_log(&path).unwrap();
        assert_eq!(table.name(), "session.log");
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_missing_file_keeps_io_source() {
        let err = read_sensor_log("/definitely/not/here.log").unwrap_err();
        assert!(err.to_string().contains("failed to read sensor log"));
    }
}
