//! Keyboard update functions
//!
//! Grid shortcuts resolve through [`crate::keymap::action_for`]; everything
//! else is typed into the focused cell.

use crate::clipboard::ClipboardPayload;
use crate::commands::Cmd;
use crate::keymap::{self, GridAction, Keystroke};
use crate::model::{CellLookup, GridModel, KeyOutcome};

use super::cell::focus_cell;
use super::clipboard::{copy_selection, paste_payload};

/// Handle a keystroke
pub fn update_key(model: &mut GridModel, stroke: Keystroke) -> Option<Cmd> {
    match keymap::action_for(stroke) {
        Some(action) if action.requires_focus() && model.focused.is_none() => {
            tracing::debug!("{:?} needs a focused cell", action);
            None
        }
        Some(GridAction::DeleteSelection) => {
            // Nothing to blank without a pivot: forward-delete in the focused cell
            paste_payload(model, &ClipboardPayload::blank())
                .or_else(|| type_into_focused(model, stroke))
        }
        Some(action) => run_action(model, action),
        None => type_into_focused(model, stroke),
    }
}

fn run_action(model: &mut GridModel, action: GridAction) -> Option<Cmd> {
    match action {
        GridAction::Navigate(direction) => {
            let from = model.focused?;
            let target = model.selection.navigate_from(from, direction)?;
            let focus = focus_cell(model, target);
            let repaint = Cmd::repaint(model.selection.current_rectangle());
            Some(Cmd::batch(focus.into_iter().chain([repaint]).collect()))
        }
        GridAction::ExtendSelectionDown => {
            model.selection.extend_selection_down();
            Some(Cmd::repaint(model.selection.current_rectangle()))
        }
        GridAction::DeleteSelection => paste_payload(model, &ClipboardPayload::blank()),
        GridAction::Copy => copy_selection(model),
        GridAction::Paste => Some(Cmd::ReadClipboard),
    }
}

fn type_into_focused(model: &mut GridModel, stroke: Keystroke) -> Option<Cmd> {
    let addr = model.focused?;
    let cell = model.grid.cell_mut(addr)?;
    match cell.key_input(stroke) {
        KeyOutcome::Applied => Some(Cmd::RefreshCell(addr)),
        KeyOutcome::Rejected | KeyOutcome::Ignored => None,
    }
}
