//! # fixed-width-rs
//!
//! A fixed-width tabular text parsing library.
//!
//! Fixed-width files declare columns by character position rather than by
//! delimiter: each field occupies a known run of characters on the line,
//! padded with spaces. This library turns a list of one-based column start
//! positions into a validated width table, then applies that table line by
//! line to produce trimmed field values.
//!
//! ## Overview
//!
//! - **Column layouts**: start positions in, validated width table out; the
//!   final column is unbounded and reads to end of line
//! - **Permissive extraction**: short lines yield empty trailing fields and
//!   blank lines yield zero-field rows, never errors
//! - **Line-source agnostic**: the caller supplies lines from wherever they
//!   come (file, stream, test vector) and decides how many header rows to skip
//!
//! ## Example
//!
//! ```
//! use fixed_width_rs::FixedWidthParser;
//!
//! // Record layout: Last(8) First(10) Dept(10) Salary(rest)
//! let parser = FixedWidthParser::new(&[1, 9, 19, 29]).unwrap();
//!
//! let row = parser.parse_line("SMITH   JOHN      SALES     00050000");
//! assert_eq!(row.fields(), ["SMITH", "JOHN", "SALES", "00050000"]);
//! ```

pub mod error;
pub mod extract;
pub mod layout;
pub mod parser;
pub mod row;
pub mod zipcode;

pub use error::LayoutError;
pub use extract::extract;
pub use layout::{ColumnLayout, ColumnWidth};
pub use parser::{FixedWidthParser, Rows};
pub use row::ParsedRow;
pub use zipcode::ZipCode;
