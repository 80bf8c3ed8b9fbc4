//! Grid model - the complete state of one grid widget
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod address;
pub mod cell;
pub mod grid;
pub mod selection;

pub use address::{AddressBook, CellAddress};
pub use cell::{is_calendar_date, Cell, CellKind, KeyOutcome};
pub use grid::{CellGrid, CellLookup, GridValues};
pub use selection::{CellRange, SelectionEngine, SelectionMatrix};

use crate::config::GridConfig;

/// The complete grid model
#[derive(Debug, Clone)]
pub struct GridModel {
    /// Cells, headers and the identifier table
    pub grid: CellGrid,
    /// Selection matrix, pivot and drag state
    pub selection: SelectionEngine,
    /// Cell with keyboard focus, if any
    pub focused: Option<CellAddress>,
}

impl GridModel {
    /// Create a grid of plain text cells
    pub fn new(rows: usize, cols: usize, prefix: &str) -> Self {
        Self::from_grid(CellGrid::new(rows, cols, prefix))
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::from_grid(CellGrid::from_config(config))
    }

    pub fn from_grid(grid: CellGrid) -> Self {
        let selection = SelectionEngine::new(grid.rows(), grid.cols());
        Self {
            grid,
            selection,
            focused: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn focused_cell(&self) -> Option<&Cell> {
        self.grid.cell(self.focused?)
    }

    /// Recreate the selection after a structure edit
    ///
    /// The new matrix has the grid's current size and no pivot. Focus is
    /// dropped if the focused cell no longer exists.
    pub fn sync_dimensions(&mut self) {
        if self
            .focused
            .is_some_and(|addr| !addr.is_within(self.rows(), self.cols()))
        {
            self.focused = None;
        }
        self.selection.resize(self.rows(), self.cols());
    }
}
