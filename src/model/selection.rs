//! Rectangle selection over the cell grid
//!
//! The selection is stored as a row-major boolean matrix plus a pivot (the
//! anchor cell). Every mutation is a full repaint of one rectangle, so the
//! matrix never holds anything but a single contiguous block of selected cells.
//!
//! ```text
//! pointer down ──► Selecting ──pointer over──► (rectangle recomputed)
//!                      │
//!     document-wide pointer up
//!                      ▼
//!                    Idle (selection persists)
//! ```

use std::fmt;

use super::address::CellAddress;
use crate::messages::Direction;

/// Axis-aligned inclusive bounds of a block of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl CellRange {
    pub const fn new(min_row: usize, max_row: usize, min_col: usize, max_col: usize) -> Self {
        Self {
            min_row,
            max_row,
            min_col,
            max_col,
        }
    }

    /// Range covering a single cell
    pub const fn single(addr: CellAddress) -> Self {
        Self::new(addr.row, addr.row, addr.col, addr.col)
    }

    /// Bounding box of two corners, regardless of which one is which
    pub fn spanning(a: CellAddress, b: CellAddress) -> Self {
        Self::new(
            a.row.min(b.row),
            a.row.max(b.row),
            a.col.min(b.col),
            a.col.max(b.col),
        )
    }

    /// Range of `rows` x `cols` cells anchored at `origin`, or `None` if empty
    pub fn anchored(origin: CellAddress, rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self::new(
            origin.row,
            origin.row + rows - 1,
            origin.col,
            origin.col + cols - 1,
        ))
    }

    pub fn contains(&self, addr: CellAddress) -> bool {
        (self.min_row..=self.max_row).contains(&addr.row)
            && (self.min_col..=self.max_col).contains(&addr.col)
    }

    pub fn row_count(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn col_count(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn cell_count(&self) -> usize {
        self.row_count() * self.col_count()
    }

    pub fn top_left(&self) -> CellAddress {
        CellAddress::new(self.min_row, self.min_col)
    }

    /// Iterate addresses in row-major order
    pub fn cells(self) -> impl Iterator<Item = CellAddress> {
        let (min_col, max_col) = (self.min_col, self.max_col);
        (self.min_row..=self.max_row)
            .flat_map(move |row| (min_col..=max_col).map(move |col| CellAddress::new(row, col)))
    }

    /// Bounds as `(min_row, max_row, min_col, max_col)`, with the
    /// `(-1, -1, -1, -1)` sentinel standing in for "nothing selected"
    pub fn bounds_or_sentinel(range: Option<CellRange>) -> (i64, i64, i64, i64) {
        match range {
            Some(r) => (
                r.min_row as i64,
                r.max_row as i64,
                r.min_col as i64,
                r.max_col as i64,
            ),
            None => (-1, -1, -1, -1),
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows {}..={} cols {}..={}",
            self.min_row, self.max_row, self.min_col, self.max_col
        )
    }
}

/// `rows x cols` selected/unselected flags, row-major
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl SelectionMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_selected(&self, addr: CellAddress) -> bool {
        addr.is_within(self.rows, self.cols) && self.cells[addr.row * self.cols + addr.col]
    }

    fn set(&mut self, addr: CellAddress, selected: bool) {
        if addr.is_within(self.rows, self.cols) {
            self.cells[addr.row * self.cols + addr.col] = selected;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Select exactly the cells of `range` (clipped to the matrix), nothing else
    pub fn paint(&mut self, range: Option<CellRange>) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let addr = CellAddress::new(row, col);
                let inside = range.is_some_and(|r| r.contains(addr));
                self.cells[row * self.cols + col] = inside;
            }
        }
    }

    /// Minimal bounding box of all selected cells
    ///
    /// Scans row-major; the first selected cell seeds the bounds and later
    /// ones only ever widen them.
    pub fn bounding_box(&self) -> Option<CellRange> {
        let mut bounds: Option<CellRange> = None;
        for row in 0..self.rows {
            for col in 0..self.cols {
                if !self.cells[row * self.cols + col] {
                    continue;
                }
                match bounds.as_mut() {
                    None => bounds = Some(CellRange::single(CellAddress::new(row, col))),
                    Some(b) => {
                        b.min_row = b.min_row.min(row);
                        b.max_row = b.max_row.max(row);
                        b.min_col = b.min_col.min(col);
                        b.max_col = b.max_col.max(col);
                    }
                }
            }
        }
        bounds
    }

    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s).count()
    }
}

/// Pivot-anchored rectangle selection engine
///
/// One instance per grid. The drag flag lives here (not in a global) and is
/// cleared by [`SelectionEngine::pointer_up`], which the shell must wire to a
/// document-wide release event so a release outside the grid still ends the drag.
#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    matrix: SelectionMatrix,
    pivot: Option<CellAddress>,
    dragging: bool,
}

impl SelectionEngine {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            matrix: SelectionMatrix::new(rows, cols),
            pivot: None,
            dragging: false,
        }
    }

    pub fn matrix(&self) -> &SelectionMatrix {
        &self.matrix
    }

    pub fn pivot(&self) -> Option<CellAddress> {
        self.pivot
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_selected(&self, addr: CellAddress) -> bool {
        self.matrix.is_selected(addr)
    }

    /// Start a new selection anchored at `cell`
    pub fn begin_selection(&mut self, cell: CellAddress) {
        if !cell.is_within(self.matrix.rows(), self.matrix.cols()) {
            tracing::warn!("begin_selection: {} is outside the grid", cell);
            return;
        }
        self.pivot = Some(cell);
        self.matrix.paint(Some(CellRange::single(cell)));
    }

    /// Select the bounding box of the pivot and `cell`
    ///
    /// Without a pivot this behaves like [`SelectionEngine::begin_selection`].
    pub fn extend_selection(&mut self, cell: CellAddress) {
        if !cell.is_within(self.matrix.rows(), self.matrix.cols()) {
            tracing::warn!("extend_selection: {} is outside the grid", cell);
            return;
        }
        match self.pivot {
            Some(pivot) => self.matrix.paint(Some(CellRange::spanning(pivot, cell))),
            None => self.begin_selection(cell),
        }
    }

    /// Grow the current rectangle down to the last row, keeping its columns
    pub fn extend_selection_down(&mut self) {
        let Some(current) = self.current_rectangle() else {
            return;
        };
        let last_row = self.matrix.rows().saturating_sub(1);
        self.matrix.paint(Some(CellRange::new(
            current.min_row,
            last_row,
            current.min_col,
            current.max_col,
        )));
    }

    /// Move a single-cell selection one step from `cell`
    ///
    /// Returns the newly selected cell, or `None` when the step would leave the
    /// grid (in which case nothing changes).
    pub fn navigate_from(&mut self, cell: CellAddress, direction: Direction) -> Option<CellAddress> {
        let target = cell.step(direction, self.matrix.rows(), self.matrix.cols())?;
        self.begin_selection(target);
        Some(target)
    }

    /// Minimal bounding rectangle of the selected cells
    pub fn current_rectangle(&self) -> Option<CellRange> {
        self.matrix.bounding_box()
    }

    /// Replace the selection with exactly `range` (`None` clears it)
    pub fn repaint(&mut self, range: Option<CellRange>) {
        self.matrix.paint(range);
    }

    /// Clear all selected cells and the pivot
    pub fn reset(&mut self) {
        self.matrix.clear();
        self.pivot = None;
    }

    /// Recreate the matrix for new grid dimensions
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.matrix = SelectionMatrix::new(rows, cols);
        self.pivot = None;
        self.dragging = false;
    }

    // === Pointer state machine ===

    pub fn pointer_down(&mut self, cell: CellAddress) {
        self.dragging = true;
        self.begin_selection(cell);
    }

    /// Extend while a drag is in progress; ignored otherwise
    pub fn pointer_over(&mut self, cell: CellAddress) -> bool {
        if !self.dragging {
            return false;
        }
        self.extend_selection(cell);
        true
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> CellAddress {
        CellAddress::new(row, col)
    }

    #[test]
    fn test_begin_selection_marks_single_cell() {
        let mut engine = SelectionEngine::new(4, 4);
        engine.begin_selection(at(1, 2));

        assert_eq!(engine.pivot(), Some(at(1, 2)));
        assert_eq!(engine.matrix().selected_count(), 1);
        assert_eq!(engine.current_rectangle(), Some(CellRange::single(at(1, 2))));
    }

    #[test]
    fn test_extend_selection_any_corner() {
        let mut engine = SelectionEngine::new(5, 5);
        engine.begin_selection(at(3, 3));
        engine.extend_selection(at(1, 0));

        assert_eq!(engine.current_rectangle(), Some(CellRange::new(1, 3, 0, 3)));
        assert_eq!(engine.matrix().selected_count(), 12);
        assert_eq!(engine.pivot(), Some(at(3, 3)));
    }

    #[test]
    fn test_extend_selection_shrinks_on_repaint() {
        let mut engine = SelectionEngine::new(5, 5);
        engine.begin_selection(at(0, 0));
        engine.extend_selection(at(4, 4));
        engine.extend_selection(at(1, 1));

        assert_eq!(engine.current_rectangle(), Some(CellRange::new(0, 1, 0, 1)));
        assert!(!engine.is_selected(at(4, 4)));
    }

    #[test]
    fn test_extend_without_pivot_begins() {
        let mut engine = SelectionEngine::new(3, 3);
        engine.extend_selection(at(2, 1));
        assert_eq!(engine.pivot(), Some(at(2, 1)));
        assert_eq!(engine.current_rectangle(), Some(CellRange::single(at(2, 1))));
    }

    #[test]
    fn test_extend_selection_down_keeps_columns() {
        let mut engine = SelectionEngine::new(6, 4);
        engine.begin_selection(at(1, 1));
        engine.extend_selection(at(2, 2));
        engine.extend_selection_down();

        assert_eq!(engine.current_rectangle(), Some(CellRange::new(1, 5, 1, 2)));
    }

    #[test]
    fn test_extend_selection_down_without_selection_is_noop() {
        let mut engine = SelectionEngine::new(3, 3);
        engine.extend_selection_down();
        assert_eq!(engine.current_rectangle(), None);
    }

    #[test]
    fn test_navigate_moves_single_cell() {
        let mut engine = SelectionEngine::new(3, 3);
        engine.begin_selection(at(1, 1));

        assert_eq!(engine.navigate_from(at(1, 1), Direction::Down), Some(at(2, 1)));
        assert_eq!(engine.current_rectangle(), Some(CellRange::single(at(2, 1))));
        assert_eq!(engine.pivot(), Some(at(2, 1)));
    }

    #[test]
    fn test_navigate_at_boundary_is_noop() {
        let mut engine = SelectionEngine::new(3, 3);
        engine.begin_selection(at(0, 2));
        engine.extend_selection(at(1, 2));
        let before = engine.current_rectangle();

        assert_eq!(engine.navigate_from(at(0, 2), Direction::Up), None);
        assert_eq!(engine.navigate_from(at(0, 2), Direction::Right), None);
        assert_eq!(engine.current_rectangle(), before);
        assert_eq!(engine.pivot(), Some(at(0, 2)));
    }

    #[test]
    fn test_reset_clears_pivot_and_matrix() {
        let mut engine = SelectionEngine::new(3, 3);
        engine.begin_selection(at(0, 0));
        engine.extend_selection(at(2, 2));
        engine.reset();

        assert_eq!(engine.current_rectangle(), None);
        assert_eq!(engine.pivot(), None);
        assert_eq!(
            CellRange::bounds_or_sentinel(engine.current_rectangle()),
            (-1, -1, -1, -1)
        );
    }

    #[test]
    fn test_drag_state_machine() {
        let mut engine = SelectionEngine::new(4, 4);
        assert!(!engine.pointer_over(at(1, 1)));
        assert_eq!(engine.current_rectangle(), None);

        engine.pointer_down(at(0, 0));
        assert!(engine.is_dragging());
        assert!(engine.pointer_over(at(2, 1)));
        assert_eq!(engine.current_rectangle(), Some(CellRange::new(0, 2, 0, 1)));

        engine.pointer_up();
        assert!(!engine.is_dragging());
        assert!(!engine.pointer_over(at(3, 3)));
        assert_eq!(engine.current_rectangle(), Some(CellRange::new(0, 2, 0, 1)));
    }

    #[test]
    fn test_resize_recreates_matrix() {
        let mut engine = SelectionEngine::new(2, 2);
        engine.pointer_down(at(1, 1));
        engine.resize(3, 5);

        assert_eq!(engine.matrix().rows(), 3);
        assert_eq!(engine.matrix().cols(), 5);
        assert_eq!(engine.current_rectangle(), None);
        assert_eq!(engine.pivot(), None);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_out_of_bounds_begin_is_ignored() {
        let mut engine = SelectionEngine::new(2, 2);
        engine.begin_selection(at(0, 0));
        engine.begin_selection(at(5, 0));
        assert_eq!(engine.pivot(), Some(at(0, 0)));
    }

    #[test]
    fn test_bounding_box_of_scattered_cells() {
        let mut matrix = SelectionMatrix::new(4, 4);
        matrix.set(at(0, 3), true);
        matrix.set(at(3, 0), true);
        matrix.set(at(2, 2), true);
        assert_eq!(matrix.bounding_box(), Some(CellRange::new(0, 3, 0, 3)));
    }

    #[test]
    fn test_range_cells_row_major() {
        let cells: Vec<_> = CellRange::new(0, 1, 1, 2).cells().collect();
        assert_eq!(cells, vec![at(0, 1), at(0, 2), at(1, 1), at(1, 2)]);
    }
}
