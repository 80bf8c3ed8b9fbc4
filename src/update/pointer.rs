//! Pointer update functions
//!
//! Handles PointerMsg messages: drag selection and outside clicks.

use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::GridModel;

/// Handle pointer messages
pub fn update_pointer(model: &mut GridModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Down(addr) => {
            if !addr.is_within(model.rows(), model.cols()) {
                tracing::warn!("pointer down on missing cell {}", addr);
                return None;
            }
            model.selection.pointer_down(addr);
            Some(Cmd::repaint(model.selection.current_rectangle()))
        }
        PointerMsg::Over(addr) => {
            if !model.selection.is_dragging() {
                return None;
            }
            model
                .selection
                .pointer_over(addr)
                .then(|| Cmd::repaint(model.selection.current_rectangle()))
        }
        PointerMsg::Up => {
            model.selection.pointer_up();
            None
        }
        PointerMsg::ClickOutside => {
            model.selection.reset();
            Some(Cmd::repaint(None))
        }
    }
}
