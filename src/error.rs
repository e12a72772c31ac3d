//! Error types for the vanban library.

use std::io;
use thiserror::Error;

/// Result type alias for vanban operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while composing or rendering documents.
///
/// Incomplete content is never an error: missing fields render as bracketed
/// placeholders and empty sections are omitted.
#[derive(Error, Debug)]
pub enum Error {
    /// Column widths of a table do not add up to its total width.
    #[error("table layout error: {columns} columns sum to {sum} twips, expected {total}")]
    TableLayout {
        /// Declared total width in twips
        total: u32,
        /// Actual sum of the column widths
        sum: u32,
        /// Number of columns
        columns: usize,
    },

    /// A header or data row has the wrong number of cells.
    #[error("table row has {found} cells, expected {expected}")]
    ColumnCount {
        /// Number of columns in the table spec
        expected: usize,
        /// Number of cells supplied
        found: usize,
    },

    /// The destination sink could not be opened or written.
    #[error("failed to render document: {0}")]
    Render(#[source] io::Error),

    /// JSON serialization of the render tree failed.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Content input could not be decoded.
    #[error("invalid content: {0}")]
    InvalidContent(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Render(err)
    }
}
