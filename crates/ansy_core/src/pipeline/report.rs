//! Run report emitted next to the aligned recordings.

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::errors::{PipelineError, PipelineResult};

/// Filename of the JSON report written into the output directory.
pub const REPORT_FILENAME: &str = "sync_report.json";

/// Offsets and row count for one output recording.
///
/// The base recording appears with all offsets zero.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub origin_offset_ms: i64,
    pub manual_offset_ms: i64,
    pub applied_offset_ms: i64,
    pub rows_written: usize,
}

/// Summary of one alignment run.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentReport {
    pub base: String,
    pub window_start: String,
    pub window_end: String,
    pub entries: Vec<ReportEntry>,
}

impl AlignmentReport {
    /// Serialize the report as pretty JSON into `dir`.
    pub fn save(&self, dir: &Path) -> PipelineResult<()> {
        let path = dir.join(REPORT_FILENAME);
        let report_err = |source: std::io::Error| PipelineError::Report {
            path: path.display().to_string(),
            source,
        };

        let json = serde_json::to_string_pretty(self).map_err(|e| report_err(e.into()))?;
        fs::write(&path, json).map_err(report_err)?;
        Ok(())
    }
}
