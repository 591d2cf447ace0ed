//! Manual-sync file handling.
//!
//! The operator marks one real-world instant per recording in an external
//! tool and saves the marks as a plain-text sync file, one
//! `filename,timestamp` record per line. This module parses that file into
//! an immutable [`SyncMap`] that the alignment stage looks reference
//! instants up in.

mod map;

pub use map::{SyncError, SyncMap, SyncResult};
