//! Line spans of elements and buffer ranges.

use crate::accessor::line_of_offset;
use crate::tree::TreeElement;
use text_buffer::{LineTable, Span};
use tracing::debug;

/// Returns how many line breaks separate the two ends of `span`.
///
/// This is `|line(end) - line(start)|`: zero for a span on one line, one for a
/// span crossing a single line break. It is a width, not a count of touched
/// lines, and so differs by one from [`LineMapping::line_count`]. The
/// offsets may be given in either order. Returns `None` if either end cannot
/// be located in `buffer`.
///
/// [`LineMapping::line_count`]: crate::LineMapping::line_count
pub fn line_count_in_range<B>(buffer: &B, span: Span) -> Option<u32>
where
    B: LineTable + ?Sized,
{
    let start = line_of_offset(buffer, span.start)?;
    let end = line_of_offset(buffer, span.end)?;
    Some(start.abs_diff(end))
}

/// Returns true if `span` crosses at least one line break.
///
/// Returns `None` when [`line_count_in_range`] does.
pub fn contains_line_break<B>(buffer: &B, span: Span) -> Option<bool>
where
    B: LineTable + ?Sized,
{
    line_count_in_range(buffer, span).map(|lines| lines != 0)
}

/// Number of `\n` characters in `text`.
///
/// A lone `\r` is not a line break, matching how [`text_buffer::LineIndex`]
/// splits lines.
pub fn count_line_breaks(text: &str) -> u32 {
    text.bytes().filter(|&byte| byte == b'\n').count() as u32
}

/// Line count of `element` computed from its own text.
///
/// # Panics
///
/// Panics if the element cannot produce its text.
pub(crate) fn text_line_count<E: TreeElement>(element: &E) -> u32 {
    let range = element.text_range();
    let Some(text) = element.text() else {
        panic!("cannot count lines: element at {range:?} has no text");
    };
    debug!(?range, "counting lines from element text");
    count_line_breaks(&text) + 1
}
