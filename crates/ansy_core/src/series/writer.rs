//! Writing aligned recordings back to CSV.

use std::path::Path;

use super::types::{SeriesError, SeriesResult, TimeSeriesTable};
use crate::time;

/// Write `table` under its original filename into `dir`.
///
/// Same tabular format the loader reads: header row, timestamp first,
/// channels after. Timestamps are emitted at millisecond precision.
pub fn write_table(dir: &Path, table: &TimeSeriesTable) -> SeriesResult<()> {
    let path = dir.join(table.name());
    let write_err = |source: csv::Error| SeriesError::Write {
        name: table.name().to_string(),
        source,
    };

    let mut writer = csv::Writer::from_path(&path).map_err(write_err)?;

    let mut header = Vec::with_capacity(table.channels().len() + 1);
    header.push(table.index_label().to_string());
    header.extend(table.channels().iter().cloned());
    writer.write_record(&header).map_err(write_err)?;

    let mut record = Vec::with_capacity(header.len());
    for row in table.rows() {
        record.clear();
        record.push(time::format_timestamp(row.timestamp));
        record.extend(row.values.iter().map(|v| v.to_string()));
        writer.write_record(&record).map_err(write_err)?;
    }

    writer.flush().map_err(|source| SeriesError::Write {
        name: table.name().to_string(),
        source: source.into(),
    })?;

    tracing::debug!("Wrote '{}' ({} rows) to {}", table.name(), table.len(), dir.display());
    Ok(())
}
