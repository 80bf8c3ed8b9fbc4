//! Keyboard mapping for the grid
//!
//! Maps a keystroke to a grid-level action. Keys that are not grid actions
//! fall through to the focused cell as text editing.
//!
//! ```text
//! Keystroke → action_for() → GridAction → update
//! ```
//!
//! | Keystroke                 | Action                | Needs a focused cell |
//! |---------------------------|-----------------------|----------------------|
//! | Up / Down                 | navigate              | yes                  |
//! | Ctrl/Meta + Shift + Down  | extend to last row    | no                   |
//! | Delete                    | blank the selection   | no                   |
//! | Ctrl/Meta + C             | copy                  | yes                  |
//! | Ctrl/Meta + V             | paste                 | yes                  |

mod types;

pub use types::{InvalidKey, KeyCode, Keystroke, Modifiers};

use crate::messages::Direction;

/// Grid-level action bound to a keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    Navigate(Direction),
    ExtendSelectionDown,
    DeleteSelection,
    Copy,
    Paste,
}

impl GridAction {
    /// Whether the action only applies while a cell has focus
    pub fn requires_focus(self) -> bool {
        matches!(
            self,
            GridAction::Navigate(_) | GridAction::Copy | GridAction::Paste
        )
    }
}

/// Resolve a keystroke to a grid action
///
/// Copy and paste are gated on modifiers alone; whether a system clipboard
/// exists is decided later, when the resulting command runs.
pub fn action_for(stroke: Keystroke) -> Option<GridAction> {
    let mods = stroke.mods;
    match stroke.key {
        KeyCode::Down if mods.command() && mods.shift() => Some(GridAction::ExtendSelectionDown),
        KeyCode::Up if !mods.command() && !mods.shift() => {
            Some(GridAction::Navigate(Direction::Up))
        }
        KeyCode::Down if !mods.command() && !mods.shift() => {
            Some(GridAction::Navigate(Direction::Down))
        }
        KeyCode::Delete => Some(GridAction::DeleteSelection),
        key if mods.command() && !mods.shift() && key.is_char_ignore_case('c') => {
            Some(GridAction::Copy)
        }
        key if mods.command() && !mods.shift() && key.is_char_ignore_case('v') => {
            Some(GridAction::Paste)
        }
        _ => None,
    }
}

/// Copy/paste shortcuts are never treated as cell text input
pub fn is_clipboard_shortcut(stroke: Keystroke) -> bool {
    matches!(action_for(stroke), Some(GridAction::Copy | GridAction::Paste))
}
