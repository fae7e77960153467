//! Event sink protocol for parsed rows

use indexmap::IndexMap;

/// Receives parsed rows as a stream of events
///
/// The parser calls `start` once per data row just before its first field,
/// `value` once per known column with the title as key, and `end` once after
/// the row's fields, but only if at least one field was emitted for it.
///
/// Returning `false` from `value` aborts the whole parse immediately; no
/// `end` fires for the interrupted row.
///
/// # Examples
///
/// ```
/// use csvpush::{CsvParser, RowSink};
///
/// struct NamePrinter;
///
/// impl RowSink for NamePrinter {
///     fn start(&mut self) {}
///     fn value(&mut self, key: &str, value: &str) -> bool {
///         if key == "name" {
///             println!("name = {}", value);
///         }
///         true
///     }
///     fn end(&mut self) {}
/// }
///
/// let mut parser = CsvParser::new();
/// parser.parse("name,age\nAnn,30\n", &mut NamePrinter).unwrap();
/// ```
pub trait RowSink {
    /// A new data row is about to be emitted
    fn start(&mut self);

    /// One field of the current row; return `false` to cancel the parse
    fn value(&mut self, key: &str, value: &str) -> bool;

    /// The current row is complete
    fn end(&mut self);
}

/// Ready-made sink that collects every row into an ordered map
///
/// Column order is preserved. If the title row contains duplicate names the
/// later column wins, keeping the earlier column's position.
///
/// # Examples
///
/// ```
/// use csvpush::{CsvParser, RowCollector};
///
/// let mut collector = RowCollector::new();
/// let mut parser = CsvParser::new();
/// parser.parse("name,age\nAnn,30\nBen,25\n", &mut collector).unwrap();
///
/// let rows = collector.rows();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0]["name"], "Ann");
/// assert_eq!(rows[1]["age"], "25");
/// ```
#[derive(Debug, Default)]
pub struct RowCollector {
    rows: Vec<IndexMap<String, String>>,
    current: IndexMap<String, String>,
}

impl RowCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows collected so far, one ordered map per row
    pub fn rows(&self) -> &[IndexMap<String, String>] {
        &self.rows
    }

    /// Consume the collector and return the rows
    pub fn into_rows(self) -> Vec<IndexMap<String, String>> {
        self.rows
    }
}

impl RowSink for RowCollector {
    fn start(&mut self) {
        self.current = IndexMap::new();
    }

    fn value(&mut self, key: &str, value: &str) -> bool {
        self.current.insert(key.to_string(), value.to_string());
        true
    }

    fn end(&mut self) {
        self.rows.push(std::mem::take(&mut self.current));
    }
}
