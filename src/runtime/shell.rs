//! The shell side of the grid: whatever shows cells to the user

use crate::model::{CellAddress, CellRange};

/// Callbacks the runtime drives after each update
pub trait GridShell {
    /// Mark exactly the cells of `range` as selected; `None` clears all markers
    fn repaint(&mut self, range: Option<CellRange>);

    /// Show a cell's current value
    fn refresh_cell(&mut self, addr: CellAddress, value: &str);

    /// Move keyboard focus to a cell
    fn focus_cell(&mut self, addr: CellAddress);

    /// Recreate the view for new dimensions
    fn rebuild(&mut self, rows: usize, cols: usize);
}

/// Shell without a display that records what it was asked to do
#[derive(Debug, Clone, Default)]
pub struct HeadlessShell {
    pub selected: Option<CellRange>,
    pub repaint_count: usize,
    pub refreshed: Vec<(CellAddress, String)>,
    pub focused: Option<CellAddress>,
    pub extent: (usize, usize),
}

impl HeadlessShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last repaint marked `addr`
    pub fn is_marked(&self, addr: CellAddress) -> bool {
        self.selected.is_some_and(|r| r.contains(addr))
    }
}

impl GridShell for HeadlessShell {
    fn repaint(&mut self, range: Option<CellRange>) {
        self.selected = range;
        self.repaint_count += 1;
    }

    fn refresh_cell(&mut self, addr: CellAddress, value: &str) {
        self.refreshed.push((addr, value.to_string()));
    }

    fn focus_cell(&mut self, addr: CellAddress) {
        self.focused = Some(addr);
    }

    fn rebuild(&mut self, rows: usize, cols: usize) {
        self.extent = (rows, cols);
        self.selected = None;
        self.focused = None;
    }
}
