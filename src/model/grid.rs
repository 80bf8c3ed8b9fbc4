//! The cell grid: dimensions, cells, column headers and the address table
//!
//! Structure edits (adding/removing rows and columns) live here. They only
//! touch cells; the owning [`super::GridModel`] resizes the selection.

use std::collections::BTreeMap;

use super::address::{AddressBook, CellAddress};
use super::cell::Cell;
use crate::config::{ColumnOptions, GridConfig};

/// Values keyed by 1-based row number, then by header name
pub type GridValues = BTreeMap<usize, BTreeMap<String, String>>;

/// Access to cells by address, as the clipboard code needs it
pub trait CellLookup {
    /// Current `(rows, cols)`
    fn extent(&self) -> (usize, usize);

    fn cell(&self, addr: CellAddress) -> Option<&Cell>;

    fn cell_mut(&mut self, addr: CellAddress) -> Option<&mut Cell>;
}

#[derive(Debug, Clone)]
struct Column {
    header: String,
    options: ColumnOptions,
}

#[derive(Debug, Clone)]
pub struct CellGrid {
    rows: usize,
    cols: usize,
    /// Row-major: `cells[row][col]`
    cells: Vec<Vec<Cell>>,
    columns: Vec<Column>,
    addresses: AddressBook,
}

impl CellGrid {
    /// Grid of plain text cells
    pub fn new(rows: usize, cols: usize, prefix: &str) -> Self {
        let options = vec![ColumnOptions::default(); cols];
        Self::with_columns(rows, options, prefix)
    }

    pub fn from_config(config: &GridConfig) -> Self {
        let options = (0..config.cols)
            .map(|col| config.column_options(col))
            .collect();
        Self::with_columns(config.rows, options, &config.prefix)
    }

    fn with_columns(rows: usize, options: Vec<ColumnOptions>, prefix: &str) -> Self {
        let mut grid = Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            columns: Vec::with_capacity(options.len()),
            addresses: AddressBook::new(prefix, 0, 0),
        };
        for opts in options {
            grid.push_column(opts);
        }
        for _ in 0..rows {
            grid.push_row();
        }
        grid.addresses.rebuild(grid.rows, grid.cols);
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn prefix(&self) -> &str {
        self.addresses.prefix()
    }

    pub fn addresses(&self) -> &AddressBook {
        &self.addresses
    }

    /// Column headers in column order
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    pub fn column_options(&self, col: usize) -> Option<&ColumnOptions> {
        self.columns.get(col).map(|c| &c.options)
    }

    /// Cell for an external identifier such as `dynamicTable_r2c3`
    pub fn cell_by_id(&self, id: &str) -> Option<&Cell> {
        let addr = self.addresses.lookup(id)?;
        self.cell(addr)
    }

    pub fn read(&self, addr: CellAddress) -> Option<&str> {
        self.cell(addr).map(Cell::read)
    }

    // === Structure edits ===

    fn push_row(&mut self) {
        let row = self
            .columns
            .iter()
            .map(|c| Cell::from_options(&c.options))
            .collect();
        self.cells.push(row);
        self.rows += 1;
    }

    fn push_column(&mut self, options: ColumnOptions) {
        let number = self.cols + 1;
        let base = options
            .header_name
            .clone()
            .unwrap_or_else(|| format!("Column {}", number));
        let header = self.unique_header(&base);

        for row in &mut self.cells {
            row.push(Cell::from_options(&options));
        }
        self.columns.push(Column { header, options });
        self.cols += 1;
    }

    /// `name`, or `name1`, `name2`, ... if already taken
    fn unique_header(&self, name: &str) -> String {
        let taken = |candidate: &str| self.columns.iter().any(|c| c.header == candidate);
        if !taken(name) {
            return name.to_string();
        }
        let mut index = 1;
        loop {
            let candidate = format!("{}{}", name, index);
            if !taken(&candidate) {
                return candidate;
            }
            index += 1;
        }
    }

    /// Append a row built from each column's options
    pub fn add_row(&mut self) {
        self.push_row();
        self.addresses.rebuild(self.rows, self.cols);
        tracing::debug!("Added row, grid is now {}x{}", self.rows, self.cols);
    }

    /// Remove the last row; returns false if there are no rows
    pub fn remove_row(&mut self) -> bool {
        if self.rows == 0 {
            tracing::info!("No more rows to remove");
            return false;
        }
        self.cells.pop();
        self.rows -= 1;
        self.addresses.rebuild(self.rows, self.cols);
        tracing::debug!("Removed row, grid is now {}x{}", self.rows, self.cols);
        true
    }

    /// Append a column of cells built from `options`
    pub fn add_column(&mut self, options: ColumnOptions) {
        self.push_column(options);
        self.addresses.rebuild(self.rows, self.cols);
        tracing::debug!("Added column, grid is now {}x{}", self.rows, self.cols);
    }

    /// Remove the last column; returns false if there are no columns
    pub fn remove_column(&mut self) -> bool {
        if self.cols == 0 {
            tracing::info!("No more columns to remove");
            return false;
        }
        for row in &mut self.cells {
            row.pop();
        }
        self.columns.pop();
        self.cols -= 1;
        self.addresses.rebuild(self.rows, self.cols);
        tracing::debug!("Removed column, grid is now {}x{}", self.rows, self.cols);
        true
    }

    // === Value export / import ===

    /// Every row (1-based) mapped to its non-empty values by header name
    pub fn values(&self) -> GridValues {
        self.cells
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let named = cells
                    .iter()
                    .zip(&self.columns)
                    .filter(|(cell, _)| !cell.read().is_empty())
                    .map(|(cell, column)| (column.header.clone(), cell.read().to_string()))
                    .collect();
                (row + 1, named)
            })
            .collect()
    }

    pub fn values_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.values())
    }

    /// Write values by 1-based row and header name
    ///
    /// Unknown headers and rows outside the grid are skipped.
    pub fn set_values(&mut self, values: &GridValues) {
        for (&row, named) in values {
            let Some(row) = row.checked_sub(1).filter(|&r| r < self.rows) else {
                tracing::warn!("set_values: no row {}", row);
                continue;
            };
            for (header, value) in named {
                let Some(col) = self.columns.iter().position(|c| &c.header == header) else {
                    tracing::debug!("set_values: no column named {:?}", header);
                    continue;
                };
                self.cells[row][col].write(value);
            }
        }
    }
}

impl CellLookup for CellGrid {
    fn extent(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn cell(&self, addr: CellAddress) -> Option<&Cell> {
        self.cells.get(addr.row)?.get(addr.col)
    }

    fn cell_mut(&mut self, addr: CellAddress) -> Option<&mut Cell> {
        self.cells.get_mut(addr.row)?.get_mut(addr.col)
    }
}
