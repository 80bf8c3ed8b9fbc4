//! Event scripts for headless runs
//!
//! A script is a YAML list of steps. Each step names what to do in its `do`
//! field; cells are written as 1-based `[row, col]` pairs, the same numbering
//! as the external cell identifiers.
//!
//! ```yaml
//! - do: down
//!   cell: [1, 1]
//! - do: over
//!   cell: [2, 2]
//! - do: up
//! - do: paste
//!   text: "9"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clipboard::EventCarrier;
use crate::config::ColumnOptions;
use crate::keymap::{InvalidKey, Keystroke};
use crate::messages::{CellMsg, Msg, PointerMsg, StructureMsg};
use crate::model::{CellAddress, GridValues};
use crate::runtime::{GridRuntime, GridShell};

/// One scripted event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "do", rename_all = "snake_case")]
pub enum ScriptStep {
    Down { cell: [usize; 2] },
    Over { cell: [usize; 2] },
    Up,
    ClickOutside,
    /// Drag from one cell to another and release
    Select { from: [usize; 2], to: [usize; 2] },
    Focus { cell: [usize; 2] },
    Blur,
    /// A keystroke such as `"ctrl+c"` or `"down"`
    Key { key: String },
    /// Type each character into the focused cell
    Type { text: String },
    Write { cell: [usize; 2], value: String },
    /// Copy event with an empty data carrier
    Copy,
    /// Paste event; without `text` the clipboard backend is read
    Paste {
        #[serde(default)]
        text: Option<String>,
    },
    SetClipboard { text: String },
    SetValues { values: GridValues },
    AddRow,
    RemoveRow,
    AddColumn(ColumnOptions),
    RemoveColumn,
}

/// Errors that can occur when loading or running a script
#[derive(Debug, Clone)]
pub enum ScriptError {
    IoError(String),
    ParseError(String),
    InvalidCell { step: usize, cell: [usize; 2] },
    InvalidKey { step: usize, key: InvalidKey },
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::IoError(e) => write!(f, "IO error: {}", e),
            ScriptError::ParseError(e) => write!(f, "Parse error: {}", e),
            ScriptError::InvalidCell { step, cell } => write!(
                f,
                "Step {}: cell [{}, {}] is not 1-based",
                step, cell[0], cell[1]
            ),
            ScriptError::InvalidKey { step, key } => write!(f, "Step {}: {}", step, key),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Load a script file
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, ScriptError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ScriptError::IoError(e.to_string()))?;
    parse_script(&content)
}

/// Parse a script from YAML
pub fn parse_script(yaml: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    serde_yaml::from_str(yaml).map_err(|e| ScriptError::ParseError(e.to_string()))
}

/// Run every step against `runtime`, stopping at the first invalid one
pub fn run_script<S: GridShell>(
    runtime: &mut GridRuntime<S>,
    steps: &[ScriptStep],
) -> Result<(), ScriptError> {
    for (index, step) in steps.iter().enumerate() {
        let number = index + 1;
        tracing::debug!("script step {}: {:?}", number, step);
        run_step(runtime, number, step)?;
    }
    Ok(())
}

fn run_step<S: GridShell>(
    runtime: &mut GridRuntime<S>,
    number: usize,
    step: &ScriptStep,
) -> Result<(), ScriptError> {
    let cell = |pair: &[usize; 2]| -> Result<CellAddress, ScriptError> {
        match (pair[0].checked_sub(1), pair[1].checked_sub(1)) {
            (Some(row), Some(col)) => Ok(CellAddress::new(row, col)),
            _ => Err(ScriptError::InvalidCell {
                step: number,
                cell: *pair,
            }),
        }
    };

    match step {
        ScriptStep::Down { cell: at } => {
            runtime.dispatch(Msg::Pointer(PointerMsg::Down(cell(at)?)));
        }
        ScriptStep::Over { cell: at } => {
            runtime.dispatch(Msg::Pointer(PointerMsg::Over(cell(at)?)));
        }
        ScriptStep::Up => runtime.dispatch(Msg::Pointer(PointerMsg::Up)),
        ScriptStep::ClickOutside => runtime.dispatch(Msg::Pointer(PointerMsg::ClickOutside)),
        ScriptStep::Select { from, to } => {
            let (from, to) = (cell(from)?, cell(to)?);
            runtime.dispatch(Msg::Pointer(PointerMsg::Down(from)));
            runtime.dispatch(Msg::Pointer(PointerMsg::Over(to)));
            runtime.dispatch(Msg::Pointer(PointerMsg::Up));
        }
        ScriptStep::Focus { cell: at } => {
            runtime.dispatch(Msg::Cell(CellMsg::Focus(cell(at)?)));
        }
        ScriptStep::Blur => runtime.dispatch(Msg::Cell(CellMsg::Blur)),
        ScriptStep::Key { key } => {
            let stroke: Keystroke = key.parse().map_err(|key| ScriptError::InvalidKey {
                step: number,
                key,
            })?;
            runtime.dispatch(Msg::Key(stroke));
        }
        ScriptStep::Type { text } => {
            for ch in text.chars() {
                runtime.dispatch(Msg::Key(Keystroke::char(ch)));
            }
        }
        ScriptStep::Write { cell: at, value } => runtime.dispatch(Msg::Cell(CellMsg::Write {
            addr: cell(at)?,
            value: value.clone(),
        })),
        ScriptStep::Copy => {
            let mut carrier = EventCarrier::new();
            let delivery = runtime.copy_event(&mut carrier);
            tracing::debug!("copy delivered to {:?}", delivery);
        }
        ScriptStep::Paste { text } => {
            let carrier = text.as_deref().map(EventCarrier::with_text);
            runtime.paste_event(carrier.as_ref());
        }
        ScriptStep::SetClipboard { text } => {
            if !runtime.set_clipboard_text(text) {
                tracing::warn!("step {}: no clipboard to set", number);
            }
        }
        ScriptStep::SetValues { values } => {
            runtime.dispatch(Msg::Cell(CellMsg::SetValues(values.clone())))
        }
        ScriptStep::AddRow => runtime.dispatch(Msg::Structure(StructureMsg::AddRow)),
        ScriptStep::RemoveRow => runtime.dispatch(Msg::Structure(StructureMsg::RemoveRow)),
        ScriptStep::AddColumn(options) => {
            runtime.dispatch(Msg::Structure(StructureMsg::AddColumn(options.clone())))
        }
        ScriptStep::RemoveColumn => runtime.dispatch(Msg::Structure(StructureMsg::RemoveColumn)),
    }
    Ok(())
}
