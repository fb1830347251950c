//! In-memory text buffer.

use crate::{ByteOffset, LineIndex, LineTable, LineTableError};

/// The characters of one document plus their line table.
///
/// Buffers are immutable; editing a document means building a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    index: LineIndex,
}

impl TextBuffer {
    /// Creates a buffer and indexes its lines.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let index = LineIndex::new(&text);
        Self { text, index }
    }

    /// Returns the buffer contents.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the line index.
    #[inline]
    pub fn index(&self) -> &LineIndex {
        &self.index
    }
}

impl LineTable for TextBuffer {
    fn line_count(&self) -> u32 {
        self.index.line_count() as u32
    }

    fn text_len(&self) -> ByteOffset {
        self.index.len()
    }

    fn line_start(&self, line: u32) -> Option<ByteOffset> {
        self.index.line_start(line)
    }

    fn line_end(&self, line: u32) -> Option<ByteOffset> {
        self.index.line_end(line)
    }

    fn line_number(&self, offset: ByteOffset) -> Result<u32, LineTableError> {
        let len = self.index.len();
        if offset > len {
            return Err(LineTableError::OffsetOutOfBounds { offset, len });
        }
        if !self.text.is_char_boundary(usize::from(offset)) {
            return Err(LineTableError::NotCharBoundary { offset });
        }

        self.index
            .line_of(offset)
            .ok_or(LineTableError::OffsetOutOfBounds { offset, len })
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextBuffer {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use text_size::TextSize;

    #[test]
    fn test_line_table_queries() {
        let buffer = TextBuffer::new("foo\n  // c\nbar()\n");
        assert_eq!(buffer.line_count(), 4);
        assert_eq!(buffer.text_len(), TextSize::from(17));
        assert_eq!(buffer.line_start(2), Some(TextSize::from(11)));
        assert_eq!(buffer.line_end(2), Some(TextSize::from(16)));
        assert_eq!(buffer.line_number(TextSize::from(12)), Ok(2));
        assert!(buffer.is_valid_line(3));
        assert!(!buffer.is_valid_line(4));
    }

    #[test]
    fn test_line_number_out_of_bounds() {
        let buffer = TextBuffer::new("ab");
        assert_eq!(
            buffer.line_number(TextSize::from(3)),
            Err(LineTableError::OffsetOutOfBounds {
                offset: TextSize::from(3),
                len: TextSize::from(2),
            })
        );
    }

    #[test]
    fn test_line_number_inside_multibyte_char() {
        let buffer = TextBuffer::new("é\nx");
        assert_eq!(
            buffer.line_number(TextSize::from(1)),
            Err(LineTableError::NotCharBoundary {
                offset: TextSize::from(1)
            })
        );
        assert_eq!(buffer.line_number(TextSize::from(3)), Ok(1));
    }

    #[test]
    fn test_error_display() {
        let error = LineTableError::OffsetOutOfBounds {
            offset: TextSize::from(9),
            len: TextSize::from(4),
        };
        assert_eq!(
            error.to_string(),
            "offset 9 is out of bounds for a buffer of length 4"
        );
    }
}
