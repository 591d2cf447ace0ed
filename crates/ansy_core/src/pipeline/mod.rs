//! Alignment pipeline orchestration.
//!
//! Sequences the stages of one run: load the sync map, load all
//! recordings, align every secondary recording to the base, truncate the
//! whole set to the common window, and write the outputs plus a run
//! report. Every stage fails fast; nothing is written unless truncation
//! succeeded for every recording.

mod errors;
mod report;
mod runner;

pub use errors::{PipelineError, PipelineResult};
pub use report::{AlignmentReport, ReportEntry, REPORT_FILENAME};
pub use runner::run;
