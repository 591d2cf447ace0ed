//! Recording discovery and CSV loading.

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{SeriesError, SeriesResult, SeriesRow, TimeSeriesTable};
use crate::time;

/// Load every `*.csv` recording in `dir`, sorted lexicographically by
/// filename.
///
/// The ordering is part of the contract: the first table returned is the
/// alignment base, so it must not depend on filesystem enumeration order.
/// Fails with [`SeriesError::EmptyInputSet`] when the directory holds no
/// CSV files, and with the first per-file error otherwise.
pub fn load_dir(dir: &Path) -> SeriesResult<Vec<TimeSeriesTable>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|source| SeriesError::Scan {
            dir: dir.display().to_string(),
            source,
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(SeriesError::EmptyInputSet {
            dir: dir.display().to_string(),
        });
    }

    tracing::info!("Loading {} recordings from {}", paths.len(), dir.display());
    paths.iter().map(|path| load_file(path)).collect()
}

/// Load and validate a single recording file.
///
/// First column is the timestamp index; the remaining header fields name
/// the numeric channels. Row width is checked against the header so a
/// ragged file fails at load rather than during alignment.
pub fn load_file(path: &Path) -> SeriesResult<TimeSeriesTable> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| SeriesError::Read {
            name: name.clone(),
            source,
        })?;

    let headers = reader
        .headers()
        .map_err(|source| SeriesError::Read {
            name: name.clone(),
            source,
        })?
        .clone();
    if headers.is_empty() {
        return Err(SeriesError::MissingHeader { name });
    }

    let index_label = headers
        .get(0)
        .unwrap_or_default()
        .to_string();
    let channels: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row_no = i + 1;
        let record = record.map_err(|source| SeriesError::Read {
            name: name.clone(),
            source,
        })?;

        if record.len() != channels.len() + 1 {
            return Err(SeriesError::ChannelCountMismatch {
                name,
                row: row_no,
                expected: channels.len(),
                found: record.len().saturating_sub(1),
            });
        }

        let mut fields = record.iter();
        let raw_ts = fields.next().unwrap_or_default();
        let timestamp =
            time::parse_timestamp(raw_ts).ok_or_else(|| SeriesError::InvalidTimestamp {
                name: name.clone(),
                row: row_no,
                value: raw_ts.to_string(),
            })?;

        let mut values = Vec::with_capacity(channels.len());
        for (field, channel) in fields.zip(&channels) {
            let value: f64 =
                field
                    .trim()
                    .parse()
                    .map_err(|_| SeriesError::InvalidChannelValue {
                        name: name.clone(),
                        row: row_no,
                        channel: channel.clone(),
                        value: field.to_string(),
                    })?;
            values.push(value);
        }

        rows.push(SeriesRow { timestamp, values });
    }

    tracing::debug!(
        "Loaded '{}': {} rows, {} channels",
        name,
        rows.len(),
        channels.len()
    );
    TimeSeriesTable::new(name, index_label, channels, rows)
}
