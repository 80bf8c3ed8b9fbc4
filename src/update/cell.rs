//! Cell focus and value update functions

use crate::commands::Cmd;
use crate::messages::CellMsg;
use crate::model::{CellAddress, CellLookup, CellRange, GridModel};

/// Handle cell messages
pub fn update_cell(model: &mut GridModel, msg: CellMsg) -> Option<Cmd> {
    match msg {
        CellMsg::Focus(addr) => focus_cell(model, addr),
        CellMsg::Blur => blur_focused(model).map(Cmd::RefreshCell),
        CellMsg::Write { addr, value } => {
            let Some(cell) = model.grid.cell_mut(addr) else {
                tracing::warn!("write to missing cell {}", addr);
                return None;
            };
            cell.write(&value);
            Some(Cmd::RefreshCell(addr))
        }
        CellMsg::SetValues(values) => {
            model.grid.set_values(&values);
            let all = CellRange::anchored(CellAddress::new(0, 0), model.rows(), model.cols());
            let cmds = all
                .into_iter()
                .flat_map(|range| range.cells())
                .map(Cmd::RefreshCell)
                .collect();
            Some(Cmd::batch(cmds))
        }
    }
}

/// Commit and unfocus the focused cell, returning its address
pub(crate) fn blur_focused(model: &mut GridModel) -> Option<CellAddress> {
    let addr = model.focused.take()?;
    if let Some(cell) = model.grid.cell_mut(addr) {
        cell.blur();
    }
    Some(addr)
}

/// Move keyboard focus to `addr`, committing the previously focused cell
pub(crate) fn focus_cell(model: &mut GridModel, addr: CellAddress) -> Option<Cmd> {
    if model.focused == Some(addr) {
        return None;
    }
    if model.grid.cell(addr).is_none() {
        tracing::warn!("focus on missing cell {}", addr);
        return None;
    }

    let mut cmds = Vec::new();
    if let Some(previous) = blur_focused(model) {
        cmds.push(Cmd::RefreshCell(previous));
    }
    if let Some(cell) = model.grid.cell_mut(addr) {
        cell.focus();
    }
    model.focused = Some(addr);
    cmds.push(Cmd::RefreshCell(addr));
    cmds.push(Cmd::Focus(addr));
    Some(Cmd::batch(cmds))
}
