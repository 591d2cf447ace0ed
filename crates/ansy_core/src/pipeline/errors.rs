//! Error chaining for the alignment pipeline.

use std::io;

use thiserror::Error;

use crate::series::SeriesError;
use crate::sync::SyncError;
use crate::truncate::TruncateError;

/// Top-level pipeline error.
///
/// Every failure is fatal to the run: the first error aborts it, and no
/// output file is created or modified once any stage has failed. A wrong
/// offset or a partially truncated dataset is worse than no output.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Truncate(#[from] TruncateError),

    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write run report '{path}': {source}")]
    Report {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
