//! Aligning a secondary recording onto the base recording's timeline.
//!
//! Two independently started recorders differ by an *origin offset* (the
//! gap between their first raw timestamps) and by the *manual offset*
//! between the operator marks from the sync file. The final shift is the
//! manual offset snapped onto the sampling-grid residue the two raw
//! recordings already agree on, so shifted samples never land between
//! sample instants of the base.

mod aligner;
mod offset;

pub use aligner::{align, AlignedSeries};
pub use offset::{resolve_offset, ResolvedOffset, DEFAULT_GRID_MS};
