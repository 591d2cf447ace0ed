//! Applying a resolved offset to a recording.

use chrono::{DateTime, Utc};

use super::offset::{resolve_offset, ResolvedOffset};
use crate::series::TimeSeriesTable;

/// A recording shifted onto the base timeline, together with the offset
/// breakdown that produced it.
#[derive(Debug, Clone)]
pub struct AlignedSeries {
    pub table: TimeSeriesTable,
    pub offset: ResolvedOffset,
}

/// Shift `other` onto `base`'s timeline.
///
/// The origin offset is the gap between the two recordings' first raw
/// timestamps, in truncated integer milliseconds; the manual offset is
/// the gap between the operator marks (`other_ref - base_ref`). The
/// resolved, grid-snapped offset is subtracted from every timestamp of
/// `other`, moving its marked instant toward the base's timeline. `base`
/// is only read, never modified.
pub fn align(
    base: &TimeSeriesTable,
    base_ref: DateTime<Utc>,
    other: TimeSeriesTable,
    other_ref: DateTime<Utc>,
    grid_ms: i64,
) -> AlignedSeries {
    let origin_ms =
        other.first_timestamp().timestamp_millis() - base.first_timestamp().timestamp_millis();
    let manual_ms = other_ref.timestamp_millis() - base_ref.timestamp_millis();
    let offset = resolve_offset(origin_ms, manual_ms, grid_ms);

    tracing::debug!(
        "Aligning '{}' to '{}': origin {}ms, manual {}ms, applied {}ms",
        other.name(),
        base.name(),
        offset.origin_ms,
        offset.manual_ms,
        offset.offset_ms
    );

    AlignedSeries {
        table: other.shifted_earlier(offset.offset_ms),
        offset,
    }
}
