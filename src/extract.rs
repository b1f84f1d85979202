//! Line field extraction: apply a column layout to one line of text.

use crate::layout::{ColumnLayout, ColumnWidth};
use crate::row::ParsedRow;

/// Split `line` into trimmed fields according to `layout`.
///
/// A blank or whitespace-only line returns a zero-field row immediately, so
/// blank lines read as "no data" rather than a row of empty fields. For any
/// other line the cursor skips the layout's leading characters, then each
/// column takes up to its width in characters (the unbounded final column
/// takes everything left) and is trimmed of surrounding whitespace. Embedded
/// whitespace is never altered.
///
/// Never fails: a line shorter than the declared layout just produces empty
/// trailing fields. Width is a character count, so a tab or wide glyph
/// consumes one unit regardless of how it renders.
///
/// # Example
///
/// ```
/// use fixed_width_rs::{ColumnLayout, extract};
///
/// let layout = ColumnLayout::from_start_positions(&[1, 6, 11]).unwrap();
/// let row = extract(&layout, "ABCDEFGHIJ1234");
/// assert_eq!(row.fields(), ["ABCDE", "FGHIJ", "1234"]);
/// ```
pub fn extract(layout: &ColumnLayout, line: &str) -> ParsedRow {
    if line.trim().is_empty() {
        return ParsedRow::blank();
    }

    let mut chars = line.chars();
    for _ in 0..layout.leading_skip() {
        if chars.next().is_none() {
            break;
        }
    }

    let mut fields = Vec::with_capacity(layout.column_count());
    for width in layout.widths() {
        let field: String = match width {
            ColumnWidth::Fixed(w) => chars.by_ref().take(*w).collect(),
            ColumnWidth::Unbounded => chars.by_ref().collect(),
        };
        fields.push(field.trim().to_string());
    }

    ParsedRow::new(fields)
}
