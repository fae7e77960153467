//! Streaming push-style CSV parsing with callback row delivery
//!
//! `csvpush` converts delimited text into a stream of labeled field events
//! without ever materializing the document. The parser captures a title row,
//! then pushes each data row to a [`RowSink`] one field at a time, keyed by
//! column title. Memory usage is a single field buffer plus the titles,
//! regardless of input size.
//!
//! **Behavior highlights:**
//! - Title row and first data row are configurable 1-based line numbers, so
//!   documents with preamble or unit rows parse without preprocessing
//! - CSV-style quoting with the doubled-quote escape; malformed quoting
//!   degrades to raw text instead of failing
//! - `\n`, `\r\n`, and bare `\r` row endings, with or without a trailing
//!   terminator
//! - Rows with extra fields drop the excess; short rows simply omit the
//!   missing columns
//! - The sink can cancel the parse from any `value` callback
//!
//! # Quick start
//!
//! ```
//! use csvpush::{CsvParser, RowCollector};
//!
//! let mut collector = RowCollector::new();
//! let mut parser = CsvParser::new();
//! parser.parse("name,age\r\nAnn,30\r\nBen,25\r\n", &mut collector).unwrap();
//!
//! assert_eq!(parser.titles(), ["name", "age"]);
//! assert_eq!(collector.rows()[0]["name"], "Ann");
//! ```
//!
//! # Custom sinks
//!
//! Implement [`RowSink`] to stream rows into your own representation; the
//! [`bind`] module has the field-to-type conversions a typed sink needs.

pub mod bind;
pub mod error;
pub mod options;
pub mod parser;
mod scanner;
pub mod sink;

pub use bind::{parse_field, FromField};
pub use error::{CsvError, Result};
pub use options::ParseOptions;
pub use parser::CsvParser;
pub use sink::{RowCollector, RowSink};
