//! Truncation to the common overlapping window.
//!
//! After alignment all recordings share one timeline but still start and
//! end at different instants. The common window is the latest start to
//! the earliest end; every recording is cut down to the rows inside it.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::series::TimeSeriesTable;
use crate::time;

/// Errors from window computation.
#[derive(Error, Debug)]
pub enum TruncateError {
    /// The recordings do not intersect at all.
    #[error("Recordings share no common time window (latest start {start} is after earliest end {end})")]
    NoOverlap { start: String, end: String },
}

/// Result type for truncation operations.
pub type TruncateResult<T> = Result<T, TruncateError>;

/// The time range common to all recordings, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Latest first timestamp and earliest last timestamp across `tables`.
///
/// Fails with [`TruncateError::NoOverlap`] when the recordings do not
/// intersect. `tables` must be non-empty.
pub fn common_window(tables: &[TimeSeriesTable]) -> TruncateResult<TimeWindow> {
    assert!(!tables.is_empty(), "common_window requires at least one table");

    let mut start = tables[0].first_timestamp();
    let mut end = tables[0].last_timestamp();
    for table in &tables[1..] {
        start = start.max(table.first_timestamp());
        end = end.min(table.last_timestamp());
    }

    if start > end {
        return Err(TruncateError::NoOverlap {
            start: time::format_timestamp(start),
            end: time::format_timestamp(end),
        });
    }

    Ok(TimeWindow { start, end })
}

/// Truncate every table to the recordings' common window.
///
/// Pure over its input: returns a same-length sequence with each table's
/// identity preserved and only rows inside the window kept. Fails before
/// touching any table when there is no overlap.
pub fn truncate(tables: Vec<TimeSeriesTable>) -> TruncateResult<Vec<TimeSeriesTable>> {
    let window = common_window(&tables)?;
    Ok(apply_window(tables, window))
}

/// Cut every table down to `window`, inclusive on both ends.
pub fn apply_window(tables: Vec<TimeSeriesTable>, window: TimeWindow) -> Vec<TimeSeriesTable> {
    tracing::debug!(
        "Truncating {} recordings to [{} .. {}]",
        tables.len(),
        time::format_timestamp(window.start),
        time::format_timestamp(window.end)
    );
    tables
        .into_iter()
        .map(|table| table.windowed(window.start, window.end))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::SeriesRow;
    use chrono::TimeZone;

    fn ts(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn table(name: &str, start_ms: i64, end_ms: i64) -> TimeSeriesTable {
        let rows = (start_ms..=end_ms)
            .step_by(100)
            .map(|ms| SeriesRow {
                timestamp: ts(ms),
                values: vec![ms as f64],
            })
            .collect();
        TimeSeriesTable::new(name, "timestamp", vec!["acc_x".to_string()], rows).unwrap()
    }

    #[test]
    fn window_is_latest_start_to_earliest_end() {
        let tables = vec![table("base.csv", 0, 10_000), table("other.csv", -200, 9_500)];
        let window = common_window(&tables).unwrap();
        assert_eq!(window.start, ts(0));
        assert_eq!(window.end, ts(9_500));
    }

    #[test]
    fn truncation_keeps_inclusive_bounds_and_names() {
        let tables = vec![table("base.csv", 0, 10_000), table("other.csv", -200, 9_500)];
        let truncated = truncate(tables).unwrap();

        assert_eq!(truncated.len(), 2);
        for t in &truncated {
            assert_eq!(t.first_timestamp(), ts(0));
            assert_eq!(t.last_timestamp(), ts(9_500));
        }
        assert_eq!(truncated[0].name(), "base.csv");
        assert_eq!(truncated[1].name(), "other.csv");
    }

    #[test]
    fn truncation_is_idempotent() {
        let tables = vec![table("a.csv", 0, 1_000), table("b.csv", 200, 1_400)];
        let once = truncate(tables).unwrap();
        let twice = truncate(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn disjoint_recordings_fail_with_no_overlap() {
        let tables = vec![table("a.csv", 0, 1_000), table("b.csv", 2_000, 3_000)];
        let err = truncate(tables).unwrap_err();
        assert!(matches!(err, TruncateError::NoOverlap { .. }));
    }

    #[test]
    fn single_table_truncates_to_itself() {
        let tables = vec![table("solo.csv", 0, 1_000)];
        let truncated = truncate(tables).unwrap();
        assert_eq!(truncated[0], table("solo.csv", 0, 1_000));
    }
}
