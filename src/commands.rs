//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::model::{CellAddress, CellRange};

/// Side effects returned by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Replace the selected markers with exactly this range (`None` clears all)
    Repaint(Option<CellRange>),
    /// Redraw the value of one cell
    RefreshCell(CellAddress),
    /// Move keyboard focus to a cell
    Focus(CellAddress),
    /// Put text on the clipboard
    WriteClipboard { text: String },
    /// Read the clipboard asynchronously
    /// Sends Msg::Clipboard(ReadCompleted) when done
    ReadClipboard,
    /// Rebuild the whole grid view (after a structure edit)
    Rebuild,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Repaint command for the current selection rectangle
    pub fn repaint(range: Option<CellRange>) -> Self {
        Cmd::Repaint(range)
    }

    /// Flatten nested batches into execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }

    /// Check if this command changes what the shell shows
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None | Cmd::WriteClipboard { .. } | Cmd::ReadClipboard => false,
            Cmd::Repaint(_) | Cmd::RefreshCell(_) | Cmd::Focus(_) | Cmd::Rebuild => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}
