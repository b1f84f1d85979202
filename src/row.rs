//! Parsed row: the trimmed field values from one input line.

use std::ops::Index;

/// Ordered, trimmed field values extracted from a single line.
///
/// A non-blank line always yields one field per declared column, trailing
/// fields possibly empty when the line ran out of characters. A blank or
/// whitespace-only line yields a row with zero fields, which is how callers
/// tell "blank line" apart from "short line".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRow {
    fields: Vec<String>,
}

impl ParsedRow {
    pub(crate) fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// The zero-field row produced for blank input lines.
    pub(crate) fn blank() -> Self {
        Self { fields: Vec::new() }
    }

    /// True for rows produced from blank or whitespace-only lines.
    pub fn is_blank(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the row holds no fields (same as [`is_blank`](Self::is_blank)).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// All fields in column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Consume the row, returning the owned fields.
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl Index<usize> for ParsedRow {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.fields[index]
    }
}

impl IntoIterator for ParsedRow {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedRow {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
