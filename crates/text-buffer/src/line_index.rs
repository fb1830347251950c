//! Line index for offset ↔ line conversion.

use crate::ByteOffset;
use text_size::TextSize;

/// A line and column position (0-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    /// 0-indexed line number.
    pub line: u32,
    /// 0-indexed column (byte offset within the line).
    pub col: u32,
}

impl LineCol {
    /// Creates a new line/column position.
    #[inline]
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// The line table of a text.
///
/// Only `\n` terminates a line. A text always has at least one line, and a
/// trailing `\n` opens a final empty line, so `"a\n"` has two lines.
/// Lookups are O(log n) in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// `line_starts[i]` is the offset where line `i` begins.
    line_starts: Vec<ByteOffset>,
    /// Length of the indexed text.
    len: TextSize,
}

impl LineIndex {
    /// Builds the line table for `text`.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];

        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }

        Self {
            line_starts,
            len: TextSize::from(text.len() as u32),
        }
    }

    /// Returns the number of lines.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the length of the indexed text.
    #[inline]
    pub fn len(&self) -> TextSize {
        self.len
    }

    /// Returns true if the indexed text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == TextSize::from(0)
    }

    /// Returns true if `line` names an existing line.
    #[inline]
    pub fn is_valid_line(&self, line: u32) -> bool {
        (line as usize) < self.line_starts.len()
    }

    /// Returns the line containing `offset`.
    ///
    /// `offset == len` belongs to the last line. Returns `None` past the end.
    pub fn line_of(&self, offset: ByteOffset) -> Option<u32> {
        if offset > self.len {
            return None;
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line - 1,
        };
        Some(line as u32)
    }

    /// Converts a byte offset to a line/column position.
    ///
    /// Returns `None` if the offset is out of bounds.
    pub fn line_col(&self, offset: ByteOffset) -> Option<LineCol> {
        let line = self.line_of(offset)?;
        let line_start = self.line_starts[line as usize];

        Some(LineCol {
            line,
            col: u32::from(offset - line_start),
        })
    }

    /// Converts a line/column position to a byte offset.
    ///
    /// Returns `None` if the line does not exist or the column runs past it.
    pub fn offset(&self, line_col: LineCol) -> Option<ByteOffset> {
        let start = self.line_start(line_col.line)?;
        let end = self.line_end(line_col.line)?;
        let offset = start + TextSize::from(line_col.col);
        (offset <= end).then_some(offset)
    }

    /// Returns the byte offset where a line starts.
    pub fn line_start(&self, line: u32) -> Option<ByteOffset> {
        self.line_starts.get(line as usize).copied()
    }

    /// Returns the exclusive end of a line: the offset of its `\n`, or the text
    /// length for the last line.
    pub fn line_end(&self, line: u32) -> Option<ByteOffset> {
        let line = line as usize;
        if line >= self.line_starts.len() {
            return None;
        }

        let end = self
            .line_starts
            .get(line + 1)
            .map(|&next| next - TextSize::from(1))
            .unwrap_or(self.len);

        Some(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("hello world");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(TextSize::from(0)), Some(LineCol::new(0, 0)));
        assert_eq!(index.line_col(TextSize::from(5)), Some(LineCol::new(0, 5)));
        assert_eq!(index.line_end(0), Some(TextSize::from(11)));
    }

    #[test]
    fn test_empty_text_has_one_line() {
        let index = LineIndex::new("");
        assert!(index.is_empty());
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(TextSize::from(0)));
        assert_eq!(index.line_end(0), Some(TextSize::from(0)));
        assert_eq!(index.line_of(TextSize::from(0)), Some(0));
    }

    #[test]
    fn test_multiple_lines() {
        let index = LineIndex::new("hello\nworld\nfoo");
        assert_eq!(index.line_count(), 3);

        assert_eq!(index.line_col(TextSize::from(5)), Some(LineCol::new(0, 5)));
        assert_eq!(index.line_col(TextSize::from(6)), Some(LineCol::new(1, 0)));
        assert_eq!(index.line_col(TextSize::from(10)), Some(LineCol::new(1, 4)));
        assert_eq!(index.line_col(TextSize::from(12)), Some(LineCol::new(2, 0)));
        assert_eq!(index.line_col(TextSize::from(15)), Some(LineCol::new(2, 3)));
        assert_eq!(index.line_col(TextSize::from(16)), None);
    }

    #[test]
    fn test_offset_roundtrip() {
        let text = "hello\nworld\nfoo";
        let index = LineIndex::new(text);

        for offset in 0..=text.len() {
            let offset = TextSize::from(offset as u32);
            let line_col = index.line_col(offset).unwrap();
            assert_eq!(index.offset(line_col), Some(offset));
        }
    }

    #[test]
    fn test_offset_rejects_column_past_line_end() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.offset(LineCol::new(0, 2)), Some(TextSize::from(2)));
        assert_eq!(index.offset(LineCol::new(0, 3)), None);
        assert_eq!(index.offset(LineCol::new(2, 0)), None);
    }

    #[test]
    fn test_line_bounds() {
        let index = LineIndex::new("hello\nworld\n");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_start(1), Some(TextSize::from(6)));
        assert_eq!(index.line_end(1), Some(TextSize::from(11)));
        assert_eq!(index.line_start(2), Some(TextSize::from(12)));
        assert_eq!(index.line_end(2), Some(TextSize::from(12)));
        assert_eq!(index.line_start(3), None);
        assert_eq!(index.line_end(3), None);
    }

    #[test]
    fn test_newline_belongs_to_its_line() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.line_of(TextSize::from(2)), Some(0));
        assert_eq!(index.line_of(TextSize::from(3)), Some(1));
    }
}
