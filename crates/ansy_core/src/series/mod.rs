//! Sensor recording tables: types, CSV loading, CSV writing.
//!
//! A recording is a header-first CSV file whose first column is an
//! ISO-8601 timestamp and whose remaining columns are named numeric
//! channels. The loader validates each file into a [`TimeSeriesTable`];
//! the writer persists aligned tables back in the same format.

mod loader;
mod types;
mod writer;

pub use loader::{load_dir, load_file};
pub use types::{SeriesError, SeriesResult, SeriesRow, TimeSeriesTable};
pub use writer::write_table;
