//! File-level line queries.

use crate::accessor;
use crate::span::text_line_count;
use crate::tree::{Edge, SourceFile, TreeElement};
use crate::trivia;
use text_buffer::{ByteOffset, LineTable};
use tracing::trace;

/// Line and offset queries available on every [`SourceFile`].
///
/// Queries that need a buffer first use the attached buffer, then the one the
/// owning project has registered, and return `None` if neither exists.
pub trait LineMapping: SourceFile {
    /// Returns the buffer used for line queries on this file.
    fn resolved_buffer(&self) -> Option<&Self::Buffer> {
        let buffer = self
            .attached_buffer()
            .or_else(|| self.project_buffer());
        if buffer.is_none() {
            trace!("no buffer associated with file");
        }
        buffer
    }

    /// Returns the first meaningful offset of `line`, skipping leading
    /// whitespace and comments.
    fn line_start_offset(&self, line: u32) -> Option<ByteOffset> {
        self.line_start_offset_with(line, true)
    }

    /// Returns the start offset of `line`.
    ///
    /// With `skip_trivia`, a line starting in whitespace or a comment resolves
    /// to the start of the first non-trivia sibling after it, which may lie on
    /// a later line. When there is no such sibling the raw line start is
    /// returned.
    fn line_start_offset_with(&self, line: u32, skip_trivia: bool) -> Option<ByteOffset> {
        let buffer = self.resolved_buffer()?;
        trivia::line_start_offset(self, buffer, line, skip_trivia)
    }

    /// Returns the offset one past the last character of `line`.
    fn line_end_offset(&self, line: u32) -> Option<ByteOffset> {
        accessor::line_end_offset(self.resolved_buffer()?, line)
    }

    /// Returns the line containing `offset`.
    fn line_of_offset(&self, offset: ByteOffset) -> Option<u32> {
        accessor::line_of_offset(self.resolved_buffer()?, offset)
    }

    /// Returns the line of the given edge of `element`.
    fn element_line(&self, element: &Self::Element, edge: Edge) -> Option<u32> {
        let buffer = self.resolved_buffer()?;
        let offset = edge.of(element.text_range());
        if offset > buffer.text_len() {
            return None;
        }
        accessor::line_of_offset(buffer, offset)
    }

    /// Returns the number of lines `element` touches: `end line - start line + 1`.
    ///
    /// Uses the buffer when one is available and the element's range is a
    /// non-empty range inside it and the buffer puts its end on or after its
    /// start; otherwise counts line breaks in the element's text.
    ///
    /// # Panics
    ///
    /// Panics if the text fallback is needed and the element has no text.
    fn line_count(&self, element: &Self::Element) -> u32 {
        let range = element.text_range();
        if let Some(buffer) = self.resolved_buffer() {
            if range.end() <= buffer.text_len() && range.start() < range.end() {
                let start = accessor::line_of_offset(buffer, range.start());
                let end = accessor::line_of_offset(buffer, range.end());
                let lines = start.zip(end).and_then(|(start, end)| end.checked_sub(start));
                if let Some(lines) = lines {
                    return lines + 1;
                }
            }
        }

        text_line_count(element)
    }

    /// Returns true if `element` touches more than one line.
    fn is_multi_line(&self, element: &Self::Element) -> bool {
        self.line_count(element) > 1
    }

    /// Returns true if `element` touches exactly one line.
    fn is_one_liner(&self, element: &Self::Element) -> bool {
        self.line_count(element) == 1
    }
}

impl<F: SourceFile + ?Sized> LineMapping for F {}
