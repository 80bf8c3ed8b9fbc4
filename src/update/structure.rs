//! Row and column add/remove
//!
//! Every successful edit recreates the selection at the new size and clears
//! the shell's markers.

use crate::commands::Cmd;
use crate::messages::StructureMsg;
use crate::model::GridModel;

/// Handle structure messages
pub fn update_structure(model: &mut GridModel, msg: StructureMsg) -> Option<Cmd> {
    let changed = match msg {
        StructureMsg::AddRow => {
            model.grid.add_row();
            true
        }
        StructureMsg::RemoveRow => model.grid.remove_row(),
        StructureMsg::AddColumn(options) => {
            model.grid.add_column(options);
            true
        }
        StructureMsg::RemoveColumn => model.grid.remove_column(),
    };

    if !changed {
        return None;
    }
    model.sync_dimensions();
    Some(Cmd::batch(vec![Cmd::Rebuild, Cmd::repaint(None)]))
}
