//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod cell;
mod clipboard;
mod keyboard;
mod pointer;
mod structure;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::GridModel;

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use cell::update_cell;
pub use clipboard::update_clipboard;
pub use keyboard::update_key;
pub use pointer::update_pointer;
pub use structure::update_structure;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Key(stroke) => keyboard::update_key(model, stroke),
        Msg::Cell(m) => cell::update_cell(model, m),
        Msg::Clipboard(m) => clipboard::update_clipboard(model, m),
        Msg::Structure(m) => structure::update_structure(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after selection state and logs diffs for debugging.
/// Pointer moves outside a drag are not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::PointerMsg;

    let is_noisy =
        matches!(&msg, Msg::Pointer(PointerMsg::Over(_))) && !model.selection.is_dragging();

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = SelectionSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = SelectionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "selection", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Pointer::Down(CellAddress { row: 0, col: 1 })`
/// - `Key(ctrl+c)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::Key(stroke) => format!("Key({})", stroke),
        Msg::Cell(m) => format!("Cell::{:?}", m),
        Msg::Clipboard(m) => format!("Clipboard::{:?}", m),
        Msg::Structure(m) => format!("Structure::{:?}", m),
    }
}
