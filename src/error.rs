//! Error types for CSV parsing

use thiserror::Error;

/// Errors surfaced by [`CsvParser`](crate::CsvParser)
///
/// Malformed input is never an error: broken quoting degrades to a raw
/// unquoted scan, ragged rows are absorbed by the boundary rules. The only
/// failure modes are the ones below.
#[derive(Error, Debug)]
pub enum CsvError {
    /// A parse was started while another one is running on the same instance
    #[error("a parse is already in progress on this parser instance")]
    ParseInProgress,

    /// The sink's `value` callback returned `false`, stopping the parse
    ///
    /// `row` and `column` are 1-based and name the field the sink rejected.
    #[error("parse cancelled by the sink at row {row}, column {column}")]
    Cancelled {
        /// 1-based row of the rejected field
        row: u32,
        /// 1-based column of the rejected field
        column: u32,
    },

    /// The configured row numbers violate `first_data_row > title_row >= 1`
    #[error("invalid parser configuration: {0}")]
    Config(String),

    /// Reading an input file failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for CSV operations
pub type Result<T> = std::result::Result<T, CsvError>;
