//! Parser configuration

use crate::error::{CsvError, Result};

/// Configuration for [`CsvParser`](crate::CsvParser)
///
/// Row numbers are 1-based line numbers in the input document. Rows before
/// `title_row` and between `title_row` and `first_data_row` are skipped
/// without producing events.
///
/// # Examples
///
/// ```
/// use csvpush::ParseOptions;
///
/// // Semicolon-delimited, headers on line 2, data from line 4
/// let options = ParseOptions::new()
///     .delimiter(b';')
///     .title_row(2)
///     .first_data_row(4);
///
/// assert_eq!(options.delimiter, b';');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// Field delimiter byte (default `b','`)
    pub delimiter: u8,
    /// 1-based line number holding the column titles (default 1)
    pub title_row: u32,
    /// 1-based line number where data rows begin (default 2)
    pub first_data_row: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            delimiter: b',',
            title_row: 1,
            first_data_row: 2,
        }
    }
}

impl ParseOptions {
    /// Create options with the defaults: comma delimiter, titles on line 1,
    /// data from line 2
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the 1-based title row line number (builder pattern)
    pub fn title_row(mut self, row: u32) -> Self {
        self.title_row = row;
        self
    }

    /// Set the 1-based first data row line number (builder pattern)
    pub fn first_data_row(mut self, row: u32) -> Self {
        self.first_data_row = row;
        self
    }

    /// Check the configuration invariant `first_data_row > title_row >= 1`
    pub fn validate(&self) -> Result<()> {
        if self.title_row < 1 {
            return Err(CsvError::Config(format!(
                "title_row must be at least 1, got {}",
                self.title_row
            )));
        }
        if self.first_data_row <= self.title_row {
            return Err(CsvError::Config(format!(
                "first_data_row ({}) must be greater than title_row ({})",
                self.first_data_row, self.title_row
            )));
        }
        Ok(())
    }
}
