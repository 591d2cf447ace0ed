//! Sync file parsing and lookup.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::time;

/// Errors from parsing or querying a sync file.
#[derive(Error, Debug)]
pub enum SyncError {
    /// The sync file could not be read at all.
    #[error("Failed to read sync file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A non-blank line did not split into `filename,timestamp`, or the
    /// timestamp did not parse.
    #[error("Sync file line {line}: malformed record '{content}'")]
    MalformedSyncRecord { line: usize, content: String },

    /// The same recording appeared on more than one line.
    #[error("Sync file lists '{filename}' more than once")]
    DuplicateSyncEntry { filename: String },

    /// A loaded recording has no sync mark, so it cannot be aligned.
    #[error("No sync entry for recording '{filename}'")]
    MissingSyncEntry { filename: String },
}

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Immutable mapping from recording filename to the operator-chosen
/// reference instant for that recording.
///
/// Built once per run; lookups never mutate it. Components that need a
/// reference instant receive the map by reference.
#[derive(Debug, Clone)]
pub struct SyncMap {
    entries: HashMap<String, DateTime<Utc>>,
}

impl SyncMap {
    /// Parse the sync file at `path`.
    pub fn load(path: &Path) -> SyncResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| SyncError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let map = Self::parse(&text)?;
        tracing::debug!("Loaded {} sync entries from {}", map.len(), path.display());
        Ok(map)
    }

    /// Parse sync records from raw text.
    ///
    /// One `filename,timestamp` record per non-blank line; blank lines are
    /// skipped. A repeated filename is an error rather than an overwrite,
    /// so a hand-edited file with a stale duplicate fails loudly.
    pub fn parse(text: &str) -> SyncResult<Self> {
        let mut entries = HashMap::new();

        for (i, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split(',');
            let (filename, raw_ts) = match (fields.next(), fields.next(), fields.next()) {
                (Some(filename), Some(raw_ts), None) => (filename.trim(), raw_ts),
                _ => {
                    return Err(SyncError::MalformedSyncRecord {
                        line: i + 1,
                        content: line.to_string(),
                    })
                }
            };

            let Some(timestamp) = time::parse_timestamp(raw_ts) else {
                return Err(SyncError::MalformedSyncRecord {
                    line: i + 1,
                    content: line.to_string(),
                });
            };

            if entries.insert(filename.to_string(), timestamp).is_some() {
                return Err(SyncError::DuplicateSyncEntry {
                    filename: filename.to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Reference instant for `filename`.
    ///
    /// Fails with [`SyncError::MissingSyncEntry`] when the recording has
    /// no mark; callers look this up before any alignment arithmetic.
    pub fn get(&self, filename: &str) -> SyncResult<DateTime<Utc>> {
        self.entries
            .get(filename)
            .copied()
            .ok_or_else(|| SyncError::MissingSyncEntry {
                filename: filename.to_string(),
            })
    }

    /// Whether `filename` has a sync mark.
    pub fn contains(&self, filename: &str) -> bool {
        self.entries.contains_key(filename)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
