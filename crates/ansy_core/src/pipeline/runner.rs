//! The driving routine: load, align, truncate, write.

use std::fs;
use std::path::Path;

use crate::align::{self, AlignedSeries};
use crate::series::{self, TimeSeriesTable};
use crate::sync::SyncMap;
use crate::time;
use crate::truncate;

use super::errors::{PipelineError, PipelineResult};
use super::report::{AlignmentReport, ReportEntry};

/// Run one alignment pass over `data_dir`.
///
/// Stages in order: sync map, recordings (lexicographic order, first is
/// the base), per-recording sync lookups and alignment, truncation to
/// the common window, then output. Both sync entries are resolved before
/// any offset arithmetic, so a missing mark aborts before alignment.
/// With a single recording there is nothing to align; it is truncated to
/// its own span (identity) and written as-is. The output directory is
/// only touched after truncation has succeeded for every recording.
pub fn run(
    data_dir: &Path,
    output_dir: &Path,
    sync_file: &Path,
    grid_ms: i64,
) -> PipelineResult<AlignmentReport> {
    let sync = SyncMap::load(sync_file)?;

    let mut tables = series::load_dir(data_dir)?.into_iter();
    let Some(base) = tables.next() else {
        return Err(series::SeriesError::EmptyInputSet {
            dir: data_dir.display().to_string(),
        }
        .into());
    };
    let others: Vec<TimeSeriesTable> = tables.collect();

    tracing::info!(
        "Base recording '{}', {} to align",
        base.name(),
        others.len()
    );

    let mut aligned: Vec<AlignedSeries> = Vec::with_capacity(others.len());
    if !others.is_empty() {
        let base_ref = sync.get(base.name())?;
        for other in others {
            let other_ref = sync.get(other.name())?;
            aligned.push(align::align(&base, base_ref, other, other_ref, grid_ms));
        }
    }

    let mut entries = vec![ReportEntry {
        name: base.name().to_string(),
        origin_offset_ms: 0,
        manual_offset_ms: 0,
        applied_offset_ms: 0,
        rows_written: 0,
    }];
    let mut collection = vec![base];
    for item in aligned {
        entries.push(ReportEntry {
            name: item.table.name().to_string(),
            origin_offset_ms: item.offset.origin_ms,
            manual_offset_ms: item.offset.manual_ms,
            applied_offset_ms: item.offset.offset_ms,
            rows_written: 0,
        });
        collection.push(item.table);
    }

    let window = truncate::common_window(&collection)?;
    let truncated = truncate::apply_window(collection, window);

    for (entry, table) in entries.iter_mut().zip(&truncated) {
        entry.rows_written = table.len();
    }

    fs::create_dir_all(output_dir).map_err(|source| PipelineError::OutputDir {
        path: output_dir.display().to_string(),
        source,
    })?;
    for table in &truncated {
        series::write_table(output_dir, table)?;
    }

    let report = AlignmentReport {
        base: entries[0].name.clone(),
        window_start: time::format_timestamp(window.start),
        window_end: time::format_timestamp(window.end),
        entries,
    };
    report.save(output_dir)?;

    tracing::info!(
        "Wrote {} aligned recordings to {}",
        truncated.len(),
        output_dir.display()
    );
    Ok(report)
}
