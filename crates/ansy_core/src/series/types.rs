//! Time series table types and error definitions.

use std::io;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Errors from loading, validating, or writing recordings.
#[derive(Error, Debug)]
pub enum SeriesError {
    /// The recordings directory could not be enumerated.
    #[error("Failed to scan recordings directory '{dir}': {source}")]
    Scan {
        dir: String,
        #[source]
        source: io::Error,
    },

    /// The directory held no CSV recordings at all.
    #[error("No CSV recordings found in '{dir}'")]
    EmptyInputSet { dir: String },

    /// A recording file could not be read or tokenized.
    #[error("Failed to read recording '{name}': {source}")]
    Read {
        name: String,
        #[source]
        source: csv::Error,
    },

    /// The file had no header row to name its columns.
    #[error("Recording '{name}' has no header row")]
    MissingHeader { name: String },

    /// The file parsed but yielded zero data rows.
    #[error("Recording '{name}' contains no data rows")]
    EmptyRecording { name: String },

    /// A timestamp failed to increase strictly over its predecessor.
    #[error("Recording '{name}': timestamp at row {row} does not increase strictly")]
    NonMonotonicIndex { name: String, row: usize },

    /// The first column of a row did not parse as a timestamp.
    #[error("Recording '{name}' row {row}: cannot parse timestamp '{value}'")]
    InvalidTimestamp {
        name: String,
        row: usize,
        value: String,
    },

    /// A channel cell did not parse as a number.
    #[error("Recording '{name}' row {row}, channel '{channel}': cannot parse value '{value}'")]
    InvalidChannelValue {
        name: String,
        row: usize,
        channel: String,
        value: String,
    },

    /// A row's width disagreed with the header's channel count.
    #[error("Recording '{name}' row {row}: expected {expected} channel values, found {found}")]
    ChannelCountMismatch {
        name: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An output file could not be written.
    #[error("Failed to write '{name}': {source}")]
    Write {
        name: String,
        #[source]
        source: csv::Error,
    },
}

/// Result type for series operations.
pub type SeriesResult<T> = Result<T, SeriesError>;

/// One sample: an instant plus the channel values recorded at it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub timestamp: DateTime<Utc>,
    pub values: Vec<f64>,
}

/// An ordered, validated table of samples from one recording.
///
/// Invariants enforced by [`TimeSeriesTable::new`]: at least one row,
/// strictly increasing timestamps, and every row holding exactly one
/// value per named channel. The `name` is the source filename and is
/// carried unchanged through alignment and truncation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesTable {
    name: String,
    index_label: String,
    channels: Vec<String>,
    rows: Vec<SeriesRow>,
}

impl TimeSeriesTable {
    /// Build a table, validating the recording invariants.
    pub fn new(
        name: impl Into<String>,
        index_label: impl Into<String>,
        channels: Vec<String>,
        rows: Vec<SeriesRow>,
    ) -> SeriesResult<Self> {
        let name = name.into();

        if rows.is_empty() {
            return Err(SeriesError::EmptyRecording { name });
        }

        for (i, row) in rows.iter().enumerate() {
            if row.values.len() != channels.len() {
                return Err(SeriesError::ChannelCountMismatch {
                    name,
                    row: i + 1,
                    expected: channels.len(),
                    found: row.values.len(),
                });
            }
            if i > 0 && rows[i - 1].timestamp >= row.timestamp {
                return Err(SeriesError::NonMonotonicIndex { name, row: i + 1 });
            }
        }

        Ok(Self {
            name,
            index_label: index_label.into(),
            channels,
            rows,
        })
    }

    /// Source filename this table was loaded from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header label of the timestamp column.
    pub fn index_label(&self) -> &str {
        &self.index_label
    }

    /// Names of the numeric channels, in column order.
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// All rows, ascending by timestamp.
    pub fn rows(&self) -> &[SeriesRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows. Constructed tables are non-empty;
    /// only windowing can empty one.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First (earliest) timestamp.
    pub fn first_timestamp(&self) -> DateTime<Utc> {
        self.rows[0].timestamp
    }

    /// Last (latest) timestamp.
    pub fn last_timestamp(&self) -> DateTime<Utc> {
        self.rows[self.rows.len() - 1].timestamp
    }

    /// Consume the table, shifting every timestamp earlier by `offset_ms`.
    ///
    /// A negative offset shifts later. Channel data is untouched, and a
    /// rigid shift preserves the strict ordering invariant.
    pub(crate) fn shifted_earlier(mut self, offset_ms: i64) -> Self {
        let delta = Duration::milliseconds(offset_ms);
        for row in &mut self.rows {
            row.timestamp -= delta;
        }
        self
    }

    /// Consume the table, keeping only rows with timestamps in
    /// `[start, end]` inclusive.
    pub(crate) fn windowed(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.rows
            .retain(|row| row.timestamp >= start && row.timestamp <= end);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn row(ms: i64, value: f64) -> SeriesRow {
        SeriesRow {
            timestamp: ts(ms),
            values: vec![value],
        }
    }

    fn table(name: &str, rows: Vec<SeriesRow>) -> SeriesResult<TimeSeriesTable> {
        TimeSeriesTable::new(name, "timestamp", vec!["acc_x".to_string()], rows)
    }

    #[test]
    fn rejects_empty_recording() {
        let err = table("empty.csv", vec![]).unwrap_err();
        assert!(matches!(err, SeriesError::EmptyRecording { name } if name == "empty.csv"));
    }

    #[test]
    fn rejects_non_monotonic_index() {
        let err = table("bad.csv", vec![row(0, 1.0), row(10, 2.0), row(10, 3.0)]).unwrap_err();
        assert!(matches!(err, SeriesError::NonMonotonicIndex { row: 3, .. }));
    }

    #[test]
    fn rejects_row_width_mismatch() {
        let rows = vec![SeriesRow {
            timestamp: ts(0),
            values: vec![1.0, 2.0],
        }];
        let err = table("wide.csv", rows).unwrap_err();
        assert!(matches!(
            err,
            SeriesError::ChannelCountMismatch {
                expected: 1,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn exposes_span() {
        let t = table("t.csv", vec![row(100, 1.0), row(110, 2.0), row(120, 3.0)]).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.first_timestamp(), ts(100));
        assert_eq!(t.last_timestamp(), ts(120));
    }

    #[test]
    fn shift_moves_timestamps_earlier_and_keeps_order() {
        let t = table("t.csv", vec![row(1500, 1.0), row(1510, 2.0)]).unwrap();
        let shifted = t.shifted_earlier(530);

        assert_eq!(shifted.first_timestamp(), ts(970));
        assert_eq!(shifted.last_timestamp(), ts(980));
        assert!(shifted.first_timestamp() < shifted.last_timestamp());
        assert_eq!(shifted.rows()[0].values, vec![1.0]);
    }

    #[test]
    fn negative_shift_moves_later() {
        let t = table("t.csv", vec![row(1000, 1.0)]).unwrap();
        assert_eq!(t.shifted_earlier(-250).first_timestamp(), ts(1250));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let t = table(
            "t.csv",
            vec![row(0, 1.0), row(10, 2.0), row(20, 3.0), row(30, 4.0)],
        )
        .unwrap();
        let windowed = t.windowed(ts(10), ts(20));

        assert_eq!(windowed.len(), 2);
        assert_eq!(windowed.first_timestamp(), ts(10));
        assert_eq!(windowed.last_timestamp(), ts(20));
        assert_eq!(windowed.name(), "t.csv");
    }
}
