//! The line table interface consumed by position queries.

use crate::ByteOffset;
use thiserror::Error;

/// An error raised by a line table lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineTableError {
    /// The offset lies past the end of the buffer.
    #[error("offset {offset:?} is out of bounds for a buffer of length {len:?}")]
    OffsetOutOfBounds {
        /// The requested offset.
        offset: ByteOffset,
        /// The buffer length.
        len: ByteOffset,
    },

    /// The offset splits a multi-byte character.
    #[error("offset {offset:?} is not on a character boundary")]
    NotCharBoundary {
        /// The requested offset.
        offset: ByteOffset,
    },
}

/// A line-indexed view of a text buffer.
///
/// Line indices are zero-based. `line_end` is exclusive: it points at the line
/// terminator, or at the buffer end for the last line.
pub trait LineTable {
    /// Returns the number of lines. Always at least one.
    fn line_count(&self) -> u32;

    /// Returns the buffer length in bytes.
    fn text_len(&self) -> ByteOffset;

    /// Returns true if `line` is a valid line index for this buffer.
    fn is_valid_line(&self, line: u32) -> bool {
        line < self.line_count()
    }

    /// Returns the offset of the first character of `line`.
    fn line_start(&self, line: u32) -> Option<ByteOffset>;

    /// Returns the offset one past the last character of `line`.
    fn line_end(&self, line: u32) -> Option<ByteOffset>;

    /// Returns the line containing `offset`.
    fn line_number(&self, offset: ByteOffset) -> Result<u32, LineTableError>;
}
