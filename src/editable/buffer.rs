//! Single-line edit buffer with a caret
//!
//! Offsets are character offsets; byte offsets never leak out of this module.

/// Text of one cell plus the caret position used while it has focus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellBuffer {
    text: String,
    caret: usize,
}

impl CellBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with the caret at the end
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
            caret: s.chars().count(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the content and move the caret to the end
    pub fn set_text(&mut self, s: &str) {
        self.text.clear();
        self.text.push_str(s);
        self.caret = self.len_chars();
    }

    pub fn set_caret(&mut self, caret: usize) {
        self.caret = caret.min(self.len_chars());
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, ch: char) {
        let byte = self.char_to_byte(self.caret);
        self.text.insert(byte, ch);
        self.caret += 1;
    }

    /// Delete the character before the caret (Backspace)
    pub fn delete_backward(&mut self) {
        if self.caret == 0 {
            return;
        }
        let start = self.char_to_byte(self.caret - 1);
        let end = self.char_to_byte(self.caret);
        self.text.replace_range(start..end, "");
        self.caret -= 1;
    }

    /// Delete the character at the caret (Delete)
    pub fn delete_forward(&mut self) {
        if self.caret >= self.len_chars() {
            return;
        }
        let start = self.char_to_byte(self.caret);
        let end = self.char_to_byte(self.caret + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.len_chars());
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.len_chars();
    }
}
