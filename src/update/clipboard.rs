//! Clipboard update functions
//!
//! Copy serializes the selection rectangle into a `WriteClipboard` command.
//! Paste applies carrier text right away; without it a `ReadClipboard`
//! command is issued and the paste continues on `ReadCompleted`.

use crate::clipboard::{self, ClipboardPayload};
use crate::commands::Cmd;
use crate::messages::ClipboardMsg;
use crate::model::GridModel;

/// Handle clipboard messages
pub fn update_clipboard(model: &mut GridModel, msg: ClipboardMsg) -> Option<Cmd> {
    match msg {
        ClipboardMsg::Copy => copy_selection(model),
        ClipboardMsg::Paste { text: Some(text) } => paste_text(model, &text),
        ClipboardMsg::Paste { text: None } => Some(Cmd::ReadClipboard),
        ClipboardMsg::ReadCompleted(text) => paste_text(model, &text),
    }
}

pub(crate) fn copy_selection(model: &GridModel) -> Option<Cmd> {
    let Some(range) = model.selection.current_rectangle() else {
        tracing::debug!("copy with nothing selected");
        return None;
    };
    let text = clipboard::serialize(&model.grid, range);
    Some(Cmd::WriteClipboard { text })
}

fn paste_text(model: &mut GridModel, text: &str) -> Option<Cmd> {
    paste_payload(model, &ClipboardPayload::parse(text))
}

/// Apply a payload at the pivot and repaint the selection to the written span
pub(crate) fn paste_payload(model: &mut GridModel, payload: &ClipboardPayload) -> Option<Cmd> {
    let Some(pivot) = model.selection.pivot() else {
        tracing::debug!("paste with no pivot, ignoring");
        return None;
    };
    let current = model.selection.current_rectangle();
    let report = clipboard::apply(&mut model.grid, payload, pivot, current);
    model.selection.repaint(report.span);

    let mut cmds: Vec<Cmd> = report
        .span
        .into_iter()
        .flat_map(|span| span.cells())
        .map(Cmd::RefreshCell)
        .collect();
    cmds.push(Cmd::repaint(report.span));
    Some(Cmd::batch(cmds))
}
