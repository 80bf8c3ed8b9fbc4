//! Fixed-precision decimal input
//!
//! A decimal cell alternates between two displays:
//!
//! - raw edit (between focus and blur): comma-free, every keystroke checked
//!   against `^\d+(\.\d{0,precision})?$`
//! - committed (after blur or a programmatic write): thousands grouped with
//!   commas, fraction zero-padded to exactly `precision` digits
//!
//! Programmatic writes truncate extra fraction digits and fall back to the zero
//! value for the precision when the result still fails the grammar.

use crate::keymap::{self, KeyCode, Keystroke};

/// Keys that are always let through in a decimal cell
pub const CONTROL_KEYS: [KeyCode; 5] = [
    KeyCode::Backspace,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Delete,
    KeyCode::Tab,
];

pub const DEFAULT_PRECISION: u32 = 2;

/// Decimal input controller for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalInput {
    precision: u32,
}

impl Default for DecimalInput {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

impl DecimalInput {
    pub const fn new(precision: u32) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// `"0"` for precision 0, otherwise `"0."` followed by `precision` zeros
    pub fn default_value(&self) -> String {
        if self.precision == 0 {
            "0".to_string()
        } else {
            format!("0.{}", "0".repeat(self.precision as usize))
        }
    }

    /// Check `^\d+(\.\d{0,precision})?$` (the caller strips commas first)
    pub fn matches_grammar(&self, value: &str) -> bool {
        let (int_part, frac_part) = match value.split_once('.') {
            Some((int_part, frac)) => (int_part, Some(frac)),
            None => (value, None),
        };

        if int_part.is_empty() || !is_ascii_digits(int_part) {
            return false;
        }

        match frac_part {
            None => true,
            Some(frac) => frac.len() <= self.precision as usize && is_ascii_digits(frac),
        }
    }

    /// Displayed value when the cell gains focus
    pub fn on_focus(&self, value: &str) -> String {
        strip_commas(value)
    }

    /// Decide whether a keystroke may reach the cell
    ///
    /// `current` is the comma-free value being edited and `caret` the character
    /// offset at which a typed character would be inserted.
    pub fn accepts_keystroke(&self, current: &str, caret: usize, stroke: Keystroke) -> bool {
        if keymap::is_clipboard_shortcut(stroke) {
            return true;
        }
        if CONTROL_KEYS.contains(&stroke.key) {
            return true;
        }
        match stroke.key {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                let candidate = insert_at_char(current, caret, c);
                self.matches_grammar(&candidate)
            }
            _ => false,
        }
    }

    /// Displayed value after the cell loses focus
    ///
    /// Empty stays empty; anything else is formatted for display.
    pub fn on_blur(&self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }
        self.format_committed(value)
    }

    /// Value stored by a paste or programmatic write
    pub fn write_value(&self, raw: &str) -> String {
        let stripped = strip_commas(raw);
        let truncated = truncate_fraction(&stripped, self.precision as usize);
        if self.matches_grammar(&truncated) {
            self.format_committed(&truncated)
        } else {
            self.default_value()
        }
    }

    /// Committed-display formatting
    ///
    /// Strips commas, drops leading zeros of the integer part (an all-zero or
    /// empty integer part becomes `"0"`), groups the integer digits by three and
    /// pads the fraction with zeros to `precision` digits.
    pub fn format_committed(&self, value: &str) -> String {
        let stripped = strip_commas(value);
        let (int_part, frac_part) = match stripped.split_once('.') {
            Some((int_part, frac)) => (int_part, Some(frac)),
            None => (stripped.as_str(), None),
        };

        let trimmed = int_part.trim_start_matches('0');
        let int_part = if trimmed.is_empty() { "0" } else { trimmed };
        let grouped = group_thousands(int_part);

        let precision = self.precision as usize;
        let frac = frac_part.unwrap_or("");
        if precision == 0 && frac.is_empty() {
            return grouped;
        }

        let mut frac = frac.to_string();
        while frac.chars().count() < precision {
            frac.push('0');
        }
        format!("{}.{}", grouped, frac)
    }
}

/// Remove thousands separators
pub fn strip_commas(value: &str) -> String {
    value.chars().filter(|&c| c != ',').collect()
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Cut the fraction to at most `precision` digits (truncation, not rounding)
fn truncate_fraction(value: &str, precision: usize) -> String {
    match value.split_once('.') {
        Some((int_part, frac)) if frac.chars().count() > precision => {
            let kept: String = frac.chars().take(precision).collect();
            format!("{}.{}", int_part, kept)
        }
        _ => value.to_string(),
    }
}

/// Insert a comma every three characters from the right
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out
}

/// `value` with `ch` inserted before the character at offset `caret`
pub(crate) fn insert_at_char(value: &str, caret: usize, ch: char) -> String {
    let byte = value
        .char_indices()
        .nth(caret)
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    let mut out = String::with_capacity(value.len() + ch.len_utf8());
    out.push_str(&value[..byte]);
    out.push(ch);
    out.push_str(&value[byte..]);
    out
}
