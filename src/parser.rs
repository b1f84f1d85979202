//! Parser over a sequence of lines.
//!
//! `FixedWidthParser` owns a validated [`ColumnLayout`] and applies it to
//! lines handed in by the caller. It never touches the filesystem; whoever
//! acquires the lines (a file reader, a network stream, a test vector) feeds
//! them through [`parse_line`](FixedWidthParser::parse_line) or
//! [`parse_lines`](FixedWidthParser::parse_lines).

use crate::error::LayoutError;
use crate::extract::extract;
use crate::layout::ColumnLayout;
use crate::row::ParsedRow;

/// Fixed-width line parser built from one-based column start positions.
///
/// The layout is validated once at construction and reused, unchanged, for
/// every line the parser sees.
#[derive(Debug, Clone)]
pub struct FixedWidthParser {
    layout: ColumnLayout,
}

impl FixedWidthParser {
    /// Build a parser from one-based column start positions.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_width_rs::FixedWidthParser;
    ///
    /// // Layout: Last(8) First(10) Dept(10) Salary(rest)
    /// let parser = FixedWidthParser::new(&[1, 9, 19, 29]).unwrap();
    /// let row = parser.parse_line("SMITH   JOHN      SALES     00050000");
    /// assert_eq!(row.fields(), ["SMITH", "JOHN", "SALES", "00050000"]);
    /// ```
    pub fn new(column_start_positions: &[usize]) -> Result<Self, LayoutError> {
        Ok(Self {
            layout: ColumnLayout::from_start_positions(column_start_positions)?,
        })
    }

    /// The layout this parser applies to every line.
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Parse a single line into trimmed fields.
    pub fn parse_line(&self, line: &str) -> ParsedRow {
        extract(&self.layout, line)
    }

    /// Parse a sequence of lines, discarding the first `header_rows_to_skip`.
    ///
    /// Blank lines past the header still yield blank rows rather than being
    /// dropped, so callers can tell them apart from short data lines.
    pub fn parse_lines<I>(&self, lines: I, header_rows_to_skip: usize) -> Rows<'_, I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        for _ in 0..header_rows_to_skip {
            if lines.next().is_none() {
                break;
            }
        }
        Rows {
            parser: self,
            lines,
        }
    }
}

/// Iterator of parsed rows, one per remaining input line.
///
/// Returned by [`FixedWidthParser::parse_lines`].
pub struct Rows<'a, I> {
    parser: &'a FixedWidthParser,
    lines: I,
}

impl<I> Iterator for Rows<'_, I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = ParsedRow;

    fn next(&mut self) -> Option<ParsedRow> {
        self.lines
            .next()
            .map(|line| self.parser.parse_line(line.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_positions_rejected_at_construction() {
        assert!(FixedWidthParser::new(&[]).is_err());
        assert!(FixedWidthParser::new(&[0, 5]).is_err());
        assert!(FixedWidthParser::new(&[5, 5]).is_err());
        assert!(FixedWidthParser::new(&[1, 6, 11]).is_ok());
    }

    #[test]
    fn test_parse_line_reuses_layout() {
        let parser = FixedWidthParser::new(&[1, 6, 11]).unwrap();
        let first = parser.parse_line("ABCDEFGHIJ1234");
        let second = parser.parse_line("ABCDEFGHIJ1234");
        assert_eq!(first, second);
        assert_eq!(first.fields(), ["ABCDE", "FGHIJ", "1234"]);
    }

    #[test]
    fn test_parse_lines_skips_header_rows() {
        let parser = FixedWidthParser::new(&[1, 9]).unwrap();
        let lines = [
            "NAME    DEPT",
            "------- ----",
            "SMITH   SALES",
            "JONES   ENGINEER",
        ];
        let rows: Vec<_> = parser.parse_lines(lines, 2).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].fields(), ["SMITH", "SALES"]);
        assert_eq!(rows[1].fields(), ["JONES", "ENGINEER"]);
    }

    #[test]
    fn test_parse_lines_with_no_header() {
        let parser = FixedWidthParser::new(&[1, 4]).unwrap();
        let rows: Vec<_> = parser.parse_lines(["ABCdef"], 0).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fields(), ["ABC", "def"]);
    }

    #[test]
    fn test_header_skip_past_end_yields_nothing() {
        let parser = FixedWidthParser::new(&[1]).unwrap();
        let rows: Vec<_> = parser.parse_lines(["only line"], 5).collect();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_blank_lines_yield_blank_rows() {
        let parser = FixedWidthParser::new(&[1, 6]).unwrap();
        let rows: Vec<_> = parser.parse_lines(["ABCDEF", "", "GHIJKL"], 0).collect();
        assert_eq!(rows.len(), 3);
        assert!(!rows[0].is_blank());
        assert!(rows[1].is_blank());
        assert!(!rows[2].is_blank());
    }

    #[test]
    fn test_parse_lines_accepts_owned_strings() {
        let parser = FixedWidthParser::new(&[1, 4]).unwrap();
        let lines: Vec<String> = vec!["ABCdef".to_string()];
        let rows: Vec<_> = parser.parse_lines(lines, 0).collect();
        assert_eq!(rows[0].fields(), ["ABC", "def"]);
    }
}
