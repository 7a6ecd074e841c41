//! Byte offset to line/column conversion for sourcemaps.
//!
//! Lines end at `\n` only (ropey is built without CR/Unicode line breaks), and columns
//! are counted in UTF-16 code units as JavaScript sourcemap consumers expect.

use ropey::Rope;

/// Zero-based position in the original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Location {
    pub(crate) line: usize,
    pub(crate) column: usize,
}

pub(crate) struct Locator {
    rope: Rope,
}

impl Locator {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Locate a byte offset. Offsets past the end clamp to the end of the text.
    pub(crate) fn locate(&self, byte_offset: usize) -> Location {
        let byte_offset = byte_offset.min(self.rope.len_bytes());
        let char_idx = self.rope.byte_to_char(byte_offset);
        let line = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(line);
        let column = self.rope.char_to_utf16_cu(char_idx) - self.rope.char_to_utf16_cu(line_start);
        Location { line, column }
    }
}
