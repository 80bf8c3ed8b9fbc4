//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::config::ColumnOptions;
use crate::keymap::Keystroke;
use crate::model::{CellAddress, GridValues};

/// Direction for selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Pointer events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerMsg {
    /// Button pressed over a cell
    Down(CellAddress),
    /// Pointer moved over a cell
    Over(CellAddress),
    /// Button released anywhere in the document
    Up,
    /// Click outside the grid
    ClickOutside,
}

/// Focus and value messages for a single cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellMsg {
    Focus(CellAddress),
    Blur,
    /// Programmatic write through the cell's validation
    Write { addr: CellAddress, value: String },
    /// Write values by 1-based row and header name
    SetValues(GridValues),
}

/// Clipboard events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardMsg {
    /// Copy the selection
    Copy,
    /// Paste, with the event's carrier text if it had any
    Paste { text: Option<String> },
    /// The asynchronous clipboard read finished
    ReadCompleted(String),
}

/// Row and column add/remove
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureMsg {
    AddRow,
    RemoveRow,
    AddColumn(ColumnOptions),
    RemoveColumn,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Pointer(PointerMsg),
    /// Key pressed while the grid has keyboard focus
    Key(Keystroke),
    Cell(CellMsg),
    Clipboard(ClipboardMsg),
    Structure(StructureMsg),
}
