//! Skipping whitespace and comments at the start of a line.

use crate::accessor;
use crate::tree::{SourceFile, TreeElement};
use text_buffer::ByteOffset;
use tracing::debug;

/// Returns the first sibling after `element` that is not trivia.
///
/// Only later siblings under the same parent are visited; the walk never
/// descends into children or climbs out of the parent.
pub fn skip_trivia_forward<E: TreeElement>(element: &E) -> Option<E> {
    let mut next = element.next_sibling();
    while let Some(sibling) = next {
        if !sibling.is_trivia() {
            return Some(sibling);
        }
        next = sibling.next_sibling();
    }
    None
}

/// Returns the start of `line` in `buffer`, moved past leading trivia when
/// `skip_trivia` is set.
pub(crate) fn line_start_offset<F>(
    file: &F,
    buffer: &F::Buffer,
    line: u32,
    skip_trivia: bool,
) -> Option<ByteOffset>
where
    F: SourceFile + ?Sized,
{
    let start = accessor::line_start_offset(buffer, line)?;

    // A tree that does not cover the buffer is tolerated.
    let Some(element) = file.element_at(start) else {
        return Some(start);
    };

    if !skip_trivia || !element.is_trivia() {
        return Some(start);
    }

    match skip_trivia_forward(&element) {
        Some(meaningful) => {
            let offset = meaningful.text_range().start();
            debug!(line, from = ?start, to = ?offset, "skipped leading trivia");
            Some(offset)
        }
        None => Some(start),
    }
}

