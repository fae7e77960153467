//! Push-style CSV parser with callback row delivery

use crate::error::{CsvError, Result};
use crate::options::ParseOptions;
use crate::scanner::{RowStep, Scanner};
use crate::sink::RowSink;
use std::path::Path;

/// Streaming CSV parser that delivers rows through a [`RowSink`]
///
/// The parser never materializes the document: it captures the title row,
/// then pushes every data row to the sink one field at a time, keyed by the
/// title of the field's column. Memory usage is one field buffer plus the
/// titles, regardless of document size.
///
/// Rows with more fields than titles silently drop the excess; rows with
/// fewer fields simply never report the missing trailing columns.
///
/// # Examples
///
/// ```
/// use csvpush::{CsvParser, RowCollector};
///
/// let mut collector = RowCollector::new();
/// let mut parser = CsvParser::new();
/// parser.parse("name,age\r\nAnn,30\r\nBen,25\r\n", &mut collector).unwrap();
///
/// assert_eq!(parser.titles(), ["name", "age"]);
/// assert_eq!(collector.rows().len(), 2);
/// assert_eq!(collector.rows()[0]["name"], "Ann");
/// ```
///
/// # Preamble and layout rows
///
/// ```
/// use csvpush::{CsvParser, RowCollector};
///
/// // Comment line first, titles on line 2, data from line 3
/// let input = "# exported 2024-01-01\nid,score\n7,42\n";
///
/// let mut collector = RowCollector::new();
/// let mut parser = CsvParser::new().title_row(2).first_data_row(3);
/// parser.parse(input, &mut collector).unwrap();
///
/// assert_eq!(collector.rows()[0]["id"], "7");
/// ```
pub struct CsvParser {
    options: ParseOptions,
    titles: Vec<String>,
    buf: Vec<u8>,
    in_progress: bool,
    row: u32,
    column: u32,
}

impl CsvParser {
    /// Create a parser with the default options: comma delimiter, titles on
    /// line 1, data from line 2
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    /// Create a parser with explicit options
    pub fn with_options(options: ParseOptions) -> Self {
        CsvParser {
            options,
            titles: Vec::new(),
            buf: Vec::with_capacity(256),
            in_progress: false,
            row: 1,
            column: 0,
        }
    }

    /// Set the field delimiter (builder pattern)
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// Set the 1-based title row line number (builder pattern)
    pub fn title_row(mut self, row: u32) -> Self {
        self.options.title_row = row;
        self
    }

    /// Set the 1-based first data row line number (builder pattern)
    pub fn first_data_row(mut self, row: u32) -> Self {
        self.options.first_data_row = row;
        self
    }

    /// Parse a text document, pushing every data row to `sink`
    ///
    /// Returns [`CsvError::ParseInProgress`] on a reentrant call,
    /// [`CsvError::Config`] if the row numbers are inconsistent, and
    /// [`CsvError::Cancelled`] when the sink's `value` returns `false`.
    /// Malformed input never fails: broken quoting is rescanned as raw
    /// text, and ragged or truncated rows are absorbed by the boundary
    /// rules.
    pub fn parse<S: RowSink>(&mut self, input: &str, sink: &mut S) -> Result<()> {
        if self.in_progress {
            return Err(CsvError::ParseInProgress);
        }
        self.options.validate()?;
        self.in_progress = true;
        let result = self.run(input.as_bytes(), sink);
        self.in_progress = false;
        result
    }

    /// Parse a byte buffer, stripping a UTF-8 byte-order mark if present
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    pub fn parse_bytes<S: RowSink>(&mut self, input: &[u8], sink: &mut S) -> Result<()> {
        let input = if input.starts_with(&[0xEF, 0xBB, 0xBF]) {
            &input[3..]
        } else {
            input
        };
        let text = String::from_utf8_lossy(input);
        self.parse(&text, sink)
    }

    /// Read a file and parse its contents
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvpush::{CsvParser, RowCollector};
    ///
    /// let mut collector = RowCollector::new();
    /// let mut parser = CsvParser::new();
    /// parser.parse_path("data.csv", &mut collector).unwrap();
    /// ```
    pub fn parse_path<P: AsRef<Path>, S: RowSink>(&mut self, path: P, sink: &mut S) -> Result<()> {
        let data = std::fs::read(path)?;
        self.parse_bytes(&data, sink)
    }

    /// Titles captured from the most recent parse, in column order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// 1-based row number where the most recent parse stopped
    pub fn row(&self) -> u32 {
        self.row
    }

    /// 1-based column number where the most recent parse stopped
    pub fn column(&self) -> u32 {
        self.column + 1
    }

    /// Options this parser was configured with
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    fn run<S: RowSink>(&mut self, input: &[u8], sink: &mut S) -> Result<()> {
        self.titles.clear();
        self.buf.clear();
        let mut scanner = Scanner::new(input, self.options.delimiter);

        // Preamble rows before the title row
        while scanner.row < self.options.title_row {
            scanner.skip_row();
            scanner.row += 1;
        }

        // Title row: every field becomes a column key, in encountered order.
        // Duplicate titles are permitted; consumers arbitrate.
        scanner.column = 0;
        loop {
            if scanner.at_end() {
                break;
            }
            scanner.read_field(Some(&mut self.buf));
            scanner.column += 1;
            self.titles
                .push(String::from_utf8_lossy(&self.buf).into_owned());
            self.buf.clear();
            match scanner.step() {
                RowStep::Field => continue,
                RowStep::Row | RowStep::End => break,
            }
        }
        scanner.row += 1;

        // Layout rows between the title row and the first data row
        while scanner.row < self.options.first_data_row {
            scanner.skip_row();
            scanner.row += 1;
        }

        // Data rows
        while !scanner.at_end() {
            scanner.column = 0;
            loop {
                if scanner.at_end() {
                    break;
                }
                if (scanner.column as usize) < self.titles.len() {
                    scanner.read_field(Some(&mut self.buf));
                    let value = String::from_utf8_lossy(&self.buf);
                    if scanner.column == 0 {
                        // A lone empty field at end of input is a trailing
                        // blank line, not a record
                        if value.is_empty() && scanner.at_end() {
                            break;
                        }
                        sink.start();
                    }
                    if !sink.value(&self.titles[scanner.column as usize], &value) {
                        self.row = scanner.row;
                        self.column = scanner.column;
                        return Err(CsvError::Cancelled {
                            row: scanner.row,
                            column: scanner.column + 1,
                        });
                    }
                    self.buf.clear();
                    scanner.column += 1;
                } else {
                    // Extra columns beyond the title count are discarded
                    scanner.read_field(None);
                }
                match scanner.step() {
                    RowStep::Field => continue,
                    RowStep::Row => {
                        scanner.row += 1;
                        break;
                    }
                    RowStep::End => break,
                }
            }
            if scanner.column > 0 {
                sink.end();
            }
        }

        self.row = scanner.row;
        self.column = scanner.column;
        Ok(())
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}
