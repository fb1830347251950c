//! Interfaces consumed from the syntax tree and document collaborators.

use std::borrow::Cow;
use text_buffer::{ByteOffset, LineTable};
use text_size::TextRange;

/// A node or token of a syntax tree, as seen by position queries.
pub trait TreeElement: Sized {
    /// The element's range in its file.
    fn text_range(&self) -> TextRange;

    /// The next element under the same parent, tokens included.
    fn next_sibling(&self) -> Option<Self>;

    /// The enclosing element, if any.
    fn parent(&self) -> Option<Self>;

    /// Returns true for whitespace and comments.
    fn is_trivia(&self) -> bool;

    /// The element's source text.
    ///
    /// Every element of a well-formed tree can render its text; `None` is a
    /// broken collaborator.
    fn text(&self) -> Option<Cow<'_, str>>;
}

/// A parsed file together with the ways of reaching its text buffer.
pub trait SourceFile {
    /// Elements of this file's tree.
    type Element: TreeElement;
    /// The buffer type holding the file's text.
    type Buffer: LineTable + ?Sized;

    /// Returns the leaf element whose range contains `offset`.
    fn element_at(&self, offset: ByteOffset) -> Option<Self::Element>;

    /// The buffer bound directly to this file.
    fn attached_buffer(&self) -> Option<&Self::Buffer>;

    /// The buffer registered for this file with its owning project.
    ///
    /// Consulted when no buffer is attached.
    fn project_buffer(&self) -> Option<&Self::Buffer> {
        None
    }
}

/// Which end of an element to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Edge {
    /// The start offset.
    #[default]
    Start,
    /// The end offset.
    End,
}

impl Edge {
    /// Picks this edge's offset from a range.
    #[inline]
    pub fn of(self, range: TextRange) -> ByteOffset {
        match self {
            Edge::Start => range.start(),
            Edge::End => range.end(),
        }
    }
}
