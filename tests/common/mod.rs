//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use dyngrid::clipboard::MemoryClipboard;
use dyngrid::config::{ColumnOptions, GridConfig, InputKind};
use dyngrid::keymap::{KeyCode, Keystroke, Modifiers};
use dyngrid::messages::{CellMsg, Msg, PointerMsg};
use dyngrid::model::{CellAddress, CellLookup, CellRange, GridModel};
use dyngrid::runtime::{GridRuntime, HeadlessShell};
use dyngrid::update::update;

/// Shorthand for a 0-based address
pub fn at(row: usize, col: usize) -> CellAddress {
    CellAddress::new(row, col)
}

/// Shorthand for an inclusive range
pub fn range(min_row: usize, max_row: usize, min_col: usize, max_col: usize) -> CellRange {
    CellRange::new(min_row, max_row, min_col, max_col)
}

/// Plain text model with the default prefix
pub fn test_model(rows: usize, cols: usize) -> GridModel {
    GridModel::new(rows, cols, "grid")
}

/// Plain text model whose cells hold `"r{row}c{col}"` (0-based)
pub fn filled_model(rows: usize, cols: usize) -> GridModel {
    let mut model = test_model(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if let Some(cell) = model.grid.cell_mut(at(row, col)) {
                cell.write(&format!("r{}c{}", row, col));
            }
        }
    }
    model
}

/// Model with every column a decimal column of `precision`
pub fn decimal_model(rows: usize, cols: usize, precision: u32) -> GridModel {
    let config = GridConfig {
        rows,
        cols,
        input_type: InputKind::Decimal,
        columns: (1..=cols)
            .map(|col| {
                (
                    col,
                    ColumnOptions {
                        input: InputKind::Decimal,
                        precision,
                        ..Default::default()
                    },
                )
            })
            .collect(),
        ..Default::default()
    };
    GridModel::from_config(&config)
}

/// Runtime over a headless shell and an in-memory clipboard
pub fn test_runtime(model: GridModel) -> GridRuntime<HeadlessShell> {
    GridRuntime::new(model, HeadlessShell::new()).with_clipboard(Box::new(MemoryClipboard::new()))
}

/// Runtime with no clipboard backend at all
pub fn runtime_without_clipboard(model: GridModel) -> GridRuntime<HeadlessShell> {
    GridRuntime::new(model, HeadlessShell::new())
}

/// Drag-select from `from` to `to` through `update`
pub fn select(model: &mut GridModel, from: CellAddress, to: CellAddress) {
    update(model, Msg::Pointer(PointerMsg::Down(from)));
    update(model, Msg::Pointer(PointerMsg::Over(to)));
    update(model, Msg::Pointer(PointerMsg::Up));
}

/// Drag-select through a runtime
pub fn select_in(runtime: &mut GridRuntime<HeadlessShell>, from: CellAddress, to: CellAddress) {
    runtime.dispatch(Msg::Pointer(PointerMsg::Down(from)));
    runtime.dispatch(Msg::Pointer(PointerMsg::Over(to)));
    runtime.dispatch(Msg::Pointer(PointerMsg::Up));
}

pub fn focus(model: &mut GridModel, addr: CellAddress) {
    update(model, Msg::Cell(CellMsg::Focus(addr)));
}

/// Type each character of `text` into the focused cell
pub fn type_text(model: &mut GridModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::Key(Keystroke::char(ch)));
    }
}

pub fn key(model: &mut GridModel, code: KeyCode) {
    update(model, Msg::Key(Keystroke::key(code)));
}

pub fn ctrl(ch: char) -> Keystroke {
    Keystroke::new(KeyCode::Char(ch), Modifiers::CTRL)
}

/// Value of a cell, panicking if the cell does not exist
pub fn value(model: &GridModel, addr: CellAddress) -> String {
    model
        .grid
        .read(addr)
        .unwrap_or_else(|| panic!("no cell at {}", addr))
        .to_string()
}
