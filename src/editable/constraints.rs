//! Edit constraints for free-text cells
//!
//! Constraints define which typed characters a cell accepts. Decimal cells
//! use the stricter [`super::DecimalInput`] grammar instead.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Constraints that limit what a keystroke may insert
#[derive(Debug, Clone, Copy)]
pub struct EditConstraints {
    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// Character filter (None = all characters allowed)
    /// Returns true if character is allowed
    pub char_filter: Option<CharFilter>,
}

impl Default for EditConstraints {
    fn default() -> Self {
        Self::text_cell()
    }
}

impl EditConstraints {
    /// Plain text cells: anything printable, no tabs or line breaks
    ///
    /// Tabs and newlines are the clipboard delimiters, so keeping them out of
    /// typed input keeps copied blocks rectangular.
    pub fn text_cell() -> Self {
        Self {
            max_length: None,
            char_filter: Some(|c| !c.is_control()),
        }
    }

    /// Date cells: `YYYY-MM-DD`
    pub fn date_cell() -> Self {
        Self {
            max_length: Some(10),
            char_filter: Some(|c| c.is_ascii_digit() || c == '-'),
        }
    }

    /// Check if a character passes the filter (if any)
    pub fn is_char_allowed(&self, ch: char) -> bool {
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }

    /// Check if inserting text would exceed max length
    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        if let Some(max) = self.max_length {
            current_len + insert_len > max
        } else {
            false
        }
    }

    /// Whether typing `ch` into a value of `current_len` characters is allowed
    pub fn allows_insert(&self, current_len: usize, ch: char) -> bool {
        self.is_char_allowed(ch) && !self.would_exceed_max_length(current_len, 1)
    }
}
