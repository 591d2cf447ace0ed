//! ansy core - batch alignment of independently clocked sensor recordings.
//!
//! Given a directory of CSV recordings and a manual-sync file of operator
//! marks, this crate computes the grid-snapped millisecond offset that
//! places each recording onto the base recording's timeline, truncates
//! everything to the common overlapping window, and writes the result.
//!
//! This crate contains all business logic with zero UI dependencies; the
//! `ansy` binary is a thin wrapper around [`pipeline::run`].

pub mod align;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod series;
pub mod sync;
pub mod time;
pub mod truncate;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
