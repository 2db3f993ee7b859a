//! Delimited-text (CSV-style) reading and writing.
//!
//! The reader is tolerant by design and is not a full RFC 4180 parser: the
//! field scanner resets on every physical line, so a quoted field cannot
//! span a line break. The writer always emits a UTF-8 byte-order mark and
//! the fixed catalog header row.

pub mod build;
pub mod parse;

pub use build::write;
pub use parse::{TabularDocument, parse};
