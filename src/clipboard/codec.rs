//! Tab-separated clipboard text
//!
//! Rows are separated by `\n` and columns by `\t`. Nothing is escaped, so a
//! cell value containing a tab or newline does not survive a copy/paste
//! round trip.

use crate::model::{CellAddress, CellLookup, CellRange};

/// Rows of cell text parsed from the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload {
    rows: Vec<Vec<String>>,
}

impl ClipboardPayload {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// 1x1 payload holding `value`
    pub fn single(value: &str) -> Self {
        Self::new(vec![vec![value.to_string()]])
    }

    /// The `[[""]]` payload used to blank a selection
    pub fn blank() -> Self {
        Self::single("")
    }

    /// Parse clipboard text
    ///
    /// The whole text is trimmed, split into lines on `\n` (each line trimmed
    /// again, which also drops `\r`), then each line is split on `\t`.
    pub fn parse(text: &str) -> Self {
        let rows = text
            .trim()
            .split('\n')
            .map(|line| line.trim().split('\t').map(str::to_string).collect())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row; later rows may differ
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Value at a payload position; `None` past the end of a short row
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// The value of a 1x1 payload
    pub fn single_value(&self) -> Option<&str> {
        match self.rows.as_slice() {
            [row] if row.len() == 1 => Some(row[0].as_str()),
            _ => None,
        }
    }

    pub fn is_single(&self) -> bool {
        self.single_value().is_some()
    }
}

/// Read the cells of `range` as clipboard text
///
/// A cell that cannot be found contributes an empty field.
pub fn serialize(grid: &impl CellLookup, range: CellRange) -> String {
    let mut out = String::new();
    for row in range.min_row..=range.max_row {
        if row > range.min_row {
            out.push('\n');
        }
        for col in range.min_col..=range.max_col {
            if col > range.min_col {
                out.push('\t');
            }
            let addr = CellAddress::new(row, col);
            match grid.cell(addr) {
                Some(cell) => out.push_str(cell.read()),
                None => tracing::warn!("serialize: no cell at {}", addr),
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellGrid;

    fn grid_with(values: &[&[&str]]) -> CellGrid {
        let rows = values.len();
        let cols = values.first().map_or(0, |r| r.len());
        let mut grid = CellGrid::new(rows, cols, "t");
        for (r, row) in values.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                grid.cell_mut(CellAddress::new(r, c)).unwrap().write(value);
            }
        }
        grid
    }

    #[test]
    fn test_serialize_rectangle() {
        let grid = grid_with(&[&["a", "b", "c"], &["d", "e", "f"], &["g", "h", "i"]]);
        assert_eq!(serialize(&grid, CellRange::new(0, 1, 1, 2)), "b\tc\ne\tf");
        assert_eq!(serialize(&grid, CellRange::single(CellAddress::new(2, 0))), "g");
    }

    #[test]
    fn test_serialize_keeps_empty_fields() {
        let grid = grid_with(&[&["", "x"], &["", ""]]);
        assert_eq!(serialize(&grid, CellRange::new(0, 1, 0, 1)), "\tx\n\t");
    }

    #[test]
    fn test_parse_single_value() {
        let payload = ClipboardPayload::parse("  hello \n");
        assert_eq!(payload.single_value(), Some("hello"));
        assert_eq!((payload.row_count(), payload.col_count()), (1, 1));
    }

    #[test]
    fn test_parse_block_with_crlf() {
        let payload = ClipboardPayload::parse("1\t2\r\n3\t4\r\n");
        assert_eq!(
            payload.rows(),
            &[vec!["1".to_string(), "2".to_string()], vec!["3".to_string(), "4".to_string()]]
        );
        assert!(!payload.is_single());
    }

    #[test]
    fn test_parse_ragged_rows() {
        let payload = ClipboardPayload::parse("a\tb\tc\nd");
        assert_eq!(payload.col_count(), 3);
        assert_eq!(payload.get(1, 0), Some("d"));
        assert_eq!(payload.get(1, 1), None);
    }

    #[test]
    fn test_parse_empty_text_is_blank() {
        assert_eq!(ClipboardPayload::parse("   "), ClipboardPayload::blank());
    }

    #[test]
    fn test_round_trip_without_delimiters_in_values() {
        let grid = grid_with(&[&["x1", "", "z"], &["4", "five", "6"]]);
        let range = CellRange::new(0, 1, 0, 2);
        let payload = ClipboardPayload::parse(&serialize(&grid, range));
        assert_eq!(payload.get(0, 0), Some("x1"));
        assert_eq!(payload.get(0, 1), Some(""));
        assert_eq!(payload.get(1, 1), Some("five"));
        assert_eq!((payload.row_count(), payload.col_count()), (2, 3));
    }
}
