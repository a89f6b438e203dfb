//! Data loading — delimited text tables from legacy spreadsheet exports.
//!
//! Two layers:
//! - [`table`] reads a file into a [`table::RawTable`] of untyped string
//!   cells, sniffing the delimiter and decoding Latin-1.
//! - [`load`] turns raw tables into typed domain records, failing fast when
//!   an expected column is absent.

pub mod load;
pub mod table;

pub use load::{load_index, load_long_term, load_short_term};
pub use table::RawTable;

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the data loading layer.
///
/// Row-level problems (bad field counts, unparseable cells or dates) are
/// handled by skipping; only file-level and schema-level failures surface
/// here, and both are fatal to the run.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' has no header row")]
    EmptyTable { path: PathBuf },

    #[error("expected column '{column}' not found in '{path}'")]
    MissingColumn { column: String, path: PathBuf },
}
