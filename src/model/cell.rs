//! Cell value capability
//!
//! Each cell is one of four kinds. Every kind exposes the same
//! `read` / `write` / `is_read_only` surface; the kind decides how a written
//! value is validated before it is stored.

use crate::config::{ColumnOptions, InputKind};
use crate::editable::{CellBuffer, DecimalInput, EditConstraints};
use crate::keymap::{KeyCode, Keystroke};

/// What a cell does with written values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    /// Free text
    Plain,
    /// Fixed-precision decimal, comma grouped when committed
    Decimal(DecimalInput),
    /// One of a fixed list of options (a dropdown in a graphical shell)
    Enumerated { options: Vec<String> },
    /// Calendar date as `YYYY-MM-DD`
    DateLike,
}

impl CellKind {
    pub fn name(&self) -> &'static str {
        match self {
            CellKind::Plain => "plain",
            CellKind::Decimal(_) => "decimal",
            CellKind::Enumerated { .. } => "enumerated",
            CellKind::DateLike => "date",
        }
    }
}

/// Result of routing a keystroke to a focused cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The keystroke changed the value or moved the caret
    Applied,
    /// The keystroke was suppressed by the cell's input rules
    Rejected,
    /// The cell has no use for the keystroke
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Cell {
    kind: CellKind,
    buffer: CellBuffer,
    read_only: bool,
    focused: bool,
}

impl Cell {
    fn with_kind(kind: CellKind, initial: &str) -> Self {
        Self {
            kind,
            buffer: CellBuffer::from_text(initial),
            read_only: false,
            focused: false,
        }
    }

    pub fn plain() -> Self {
        Self::with_kind(CellKind::Plain, "")
    }

    /// Decimal cell holding the zero value for its precision
    pub fn decimal(precision: u32) -> Self {
        let input = DecimalInput::new(precision);
        let initial = input.default_value();
        Self::with_kind(CellKind::Decimal(input), &initial)
    }

    /// Enumerated cell, initially showing the first option
    pub fn enumerated(options: Vec<String>) -> Self {
        let initial = options.first().cloned().unwrap_or_default();
        Self::with_kind(CellKind::Enumerated { options }, &initial)
    }

    pub fn date_like() -> Self {
        Self::with_kind(CellKind::DateLike, "")
    }

    /// Build the cell a column's options describe
    pub fn from_options(options: &ColumnOptions) -> Self {
        let cell = match options.input {
            InputKind::Text => Self::plain(),
            InputKind::Decimal => Self::decimal(options.precision),
            InputKind::Date => Self::date_like(),
            InputKind::Select => Self::enumerated(options.values.clone()),
        };
        cell.with_read_only(options.readonly)
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn kind(&self) -> &CellKind {
        &self.kind
    }

    pub fn read(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn caret(&self) -> usize {
        self.buffer.caret()
    }

    /// Precision of a decimal cell
    pub fn precision(&self) -> Option<u32> {
        match &self.kind {
            CellKind::Decimal(input) => Some(input.precision()),
            _ => None,
        }
    }

    /// Store a value through the kind's validation
    ///
    /// Used by paste and programmatic writes. Read-only cells are written too;
    /// callers that honor read-only (paste) check [`Cell::is_read_only`] first.
    /// A focused decimal cell keeps the comma-free raw form until blur.
    pub fn write(&mut self, value: &str) {
        let stored = match &self.kind {
            CellKind::Plain => value.to_string(),
            CellKind::Decimal(input) if self.focused => {
                input.on_focus(&input.write_value(value))
            }
            CellKind::Decimal(input) => input.write_value(value),
            CellKind::Enumerated { options } => {
                if options.iter().any(|o| o == value) {
                    value.to_string()
                } else {
                    String::new()
                }
            }
            CellKind::DateLike => {
                if is_calendar_date(value) {
                    value.to_string()
                } else {
                    String::new()
                }
            }
        };
        self.buffer.set_text(&stored);
    }

    /// Enter raw-edit state
    pub fn focus(&mut self) {
        self.focused = true;
        if let CellKind::Decimal(input) = &self.kind {
            let raw = input.on_focus(self.buffer.as_str());
            self.buffer.set_text(&raw);
        }
    }

    /// Leave raw-edit state, committing the displayed value
    pub fn blur(&mut self) {
        self.focused = false;
        let committed = match &self.kind {
            CellKind::Decimal(input) => input.on_blur(self.buffer.as_str()),
            CellKind::DateLike if !is_calendar_date(self.buffer.as_str()) => String::new(),
            _ => return,
        };
        self.buffer.set_text(&committed);
    }

    /// Apply a keystroke typed into the focused cell
    pub fn key_input(&mut self, stroke: Keystroke) -> KeyOutcome {
        let mods = stroke.mods;
        if mods.ctrl() || mods.meta() || mods.alt() {
            return KeyOutcome::Ignored;
        }

        if let CellKind::Decimal(input) = &self.kind {
            if !input.accepts_keystroke(self.buffer.as_str(), self.buffer.caret(), stroke) {
                tracing::trace!("decimal cell rejected {}", stroke);
                return KeyOutcome::Rejected;
            }
        }

        let constraints = match &self.kind {
            CellKind::Enumerated { .. } => return KeyOutcome::Ignored,
            CellKind::DateLike => EditConstraints::date_cell(),
            CellKind::Plain | CellKind::Decimal(_) => EditConstraints::text_cell(),
        };

        match stroke.key {
            KeyCode::Left => self.buffer.move_left(),
            KeyCode::Right => self.buffer.move_right(),
            KeyCode::Home => self.buffer.move_home(),
            KeyCode::End => self.buffer.move_end(),
            KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete if self.read_only => {
                return KeyOutcome::Rejected;
            }
            KeyCode::Char(ch) => {
                if !constraints.allows_insert(self.buffer.len_chars(), ch) {
                    tracing::trace!("{} cell rejected {:?}", self.kind.name(), ch);
                    return KeyOutcome::Rejected;
                }
                self.buffer.insert_char(ch);
            }
            KeyCode::Backspace => self.buffer.delete_backward(),
            KeyCode::Delete => self.buffer.delete_forward(),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Applied
    }
}

/// Check `YYYY-MM-DD` with a real month and day (leap years included)
pub fn is_calendar_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let field = |range: std::ops::Range<usize>| -> Option<u32> {
        let s = &value[range];
        if s.bytes().all(|b| b.is_ascii_digit()) {
            s.parse().ok()
        } else {
            None
        }
    };
    let (Some(year), Some(month), Some(day)) = (field(0..4), field(5..7), field(8..10)) else {
        return false;
    };

    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => return false,
    };
    (1..=days_in_month).contains(&day)
}
