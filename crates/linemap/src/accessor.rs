//! Line table access.
//!
//! Each accessor degrades to `None` instead of failing: an unknown line, an
//! out-of-range offset, or a line table error all mean "not computable here".

use text_buffer::{ByteOffset, LineTable};
use tracing::trace;

/// Returns the offset of the first character of `line`.
pub fn line_start_offset<B>(buffer: &B, line: u32) -> Option<ByteOffset>
where
    B: LineTable + ?Sized,
{
    if !buffer.is_valid_line(line) {
        trace!(line, line_count = buffer.line_count(), "line start: invalid line");
        return None;
    }
    buffer.line_start(line)
}

/// Returns the offset one past the last character of `line`.
pub fn line_end_offset<B>(buffer: &B, line: u32) -> Option<ByteOffset>
where
    B: LineTable + ?Sized,
{
    if !buffer.is_valid_line(line) {
        trace!(line, line_count = buffer.line_count(), "line end: invalid line");
        return None;
    }
    buffer.line_end(line)
}

/// Returns the line containing `offset`.
pub fn line_of_offset<B>(buffer: &B, offset: ByteOffset) -> Option<u32>
where
    B: LineTable + ?Sized,
{
    match buffer.line_number(offset) {
        Ok(line) => Some(line),
        Err(error) => {
            trace!(%error, "line lookup failed");
            None
        }
    }
}
