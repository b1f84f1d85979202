//! Column layout: start positions in, validated width table out.
//!
//! A layout is declared as one-based column start positions, e.g. `[1, 6, 11]`
//! for two width-5 columns followed by a final column that runs to the end of
//! the line. Construction converts the positions into a width table once;
//! extraction then reuses the table for every line.

use crate::error::LayoutError;

/// Width of a single declared column.
///
/// Every column except the last has a fixed width equal to the distance to
/// the next column's start. The last column's true width is never known from
/// start positions alone, so it is `Unbounded` and reads to end of line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Exactly this many characters (always >= 1).
    Fixed(usize),
    /// All remaining characters on the line.
    Unbounded,
}

/// Validated, immutable column width table.
///
/// Built once from start positions and never mutated afterwards, so a layout
/// can be shared read-only across threads extracting different lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    leading_skip: usize,
    widths: Vec<ColumnWidth>,
}

impl ColumnLayout {
    /// Build a layout from one-based column start positions.
    ///
    /// Positions must be non-empty and strictly ascending, with the first
    /// position at least 1. No partial layout is returned on failure.
    ///
    /// # Example
    ///
    /// ```
    /// use fixed_width_rs::{ColumnLayout, ColumnWidth};
    ///
    /// let layout = ColumnLayout::from_start_positions(&[3, 8]).unwrap();
    /// assert_eq!(layout.leading_skip(), 2);
    /// assert_eq!(
    ///     layout.widths(),
    ///     [ColumnWidth::Fixed(5), ColumnWidth::Unbounded]
    /// );
    /// ```
    pub fn from_start_positions(positions: &[usize]) -> Result<Self, LayoutError> {
        let Some(&first) = positions.first() else {
            return Err(LayoutError::NoColumns);
        };
        if first == 0 {
            return Err(LayoutError::NonPositiveStart);
        }

        let mut widths = Vec::with_capacity(positions.len());
        for pair in positions.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next <= prev {
                return Err(LayoutError::NonAscending { prev, next });
            }
            widths.push(ColumnWidth::Fixed(next - prev));
        }
        widths.push(ColumnWidth::Unbounded);

        Ok(Self {
            leading_skip: first - 1,
            widths,
        })
    }

    /// Characters discarded before the first column.
    pub fn leading_skip(&self) -> usize {
        self.leading_skip
    }

    /// Per-column widths, one per declared start position.
    pub fn widths(&self) -> &[ColumnWidth] {
        &self.widths
    }

    /// Number of declared columns.
    pub fn column_count(&self) -> usize {
        self.widths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_column() {
        let layout = ColumnLayout::from_start_positions(&[1]).unwrap();
        assert_eq!(layout.leading_skip(), 0);
        assert_eq!(layout.widths(), [ColumnWidth::Unbounded]);
    }

    #[test]
    fn test_widths_are_consecutive_differences() {
        let layout = ColumnLayout::from_start_positions(&[1, 6, 11]).unwrap();
        assert_eq!(layout.leading_skip(), 0);
        assert_eq!(
            layout.widths(),
            [
                ColumnWidth::Fixed(5),
                ColumnWidth::Fixed(5),
                ColumnWidth::Unbounded
            ]
        );
    }

    #[test]
    fn test_leading_skip_from_first_position() {
        let layout = ColumnLayout::from_start_positions(&[3, 8]).unwrap();
        assert_eq!(layout.leading_skip(), 2);
        assert_eq!(layout.column_count(), 2);
    }

    #[test]
    fn test_empty_positions_rejected() {
        let err = ColumnLayout::from_start_positions(&[]).unwrap_err();
        assert_eq!(err, LayoutError::NoColumns);
    }

    #[test]
    fn test_zero_first_position_rejected() {
        let err = ColumnLayout::from_start_positions(&[0, 5]).unwrap_err();
        assert_eq!(err, LayoutError::NonPositiveStart);
    }

    #[test]
    fn test_equal_positions_rejected() {
        let err = ColumnLayout::from_start_positions(&[5, 5]).unwrap_err();
        assert_eq!(err, LayoutError::NonAscending { prev: 5, next: 5 });
    }

    #[test]
    fn test_descending_positions_rejected() {
        let err = ColumnLayout::from_start_positions(&[5, 3]).unwrap_err();
        assert_eq!(err, LayoutError::NonAscending { prev: 5, next: 3 });
    }

    #[test]
    fn test_non_ascending_in_middle_rejected() {
        let err = ColumnLayout::from_start_positions(&[1, 6, 4]).unwrap_err();
        assert_eq!(err, LayoutError::NonAscending { prev: 6, next: 4 });
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ColumnLayout::from_start_positions(&[])
                .unwrap_err()
                .to_string(),
            "must have at least one column"
        );
        assert!(
            ColumnLayout::from_start_positions(&[0])
                .unwrap_err()
                .to_string()
                .contains("one-based")
        );
        assert!(
            ColumnLayout::from_start_positions(&[5, 5])
                .unwrap_err()
                .to_string()
                .contains("ascending order")
        );
    }

    #[test]
    fn test_ascending_sequences_always_build() {
        for positions in [
            vec![1],
            vec![7],
            vec![1, 2],
            vec![1, 2, 3, 4, 5],
            vec![10, 20, 45, 80],
        ] {
            let layout = ColumnLayout::from_start_positions(&positions).unwrap();
            assert_eq!(layout.column_count(), positions.len());
            assert_eq!(layout.widths().last(), Some(&ColumnWidth::Unbounded));
            for (i, pair) in positions.windows(2).enumerate() {
                assert_eq!(layout.widths()[i], ColumnWidth::Fixed(pair[1] - pair[0]));
            }
        }
    }
}
