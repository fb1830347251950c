//! Span and byte offset types for buffer positions.

use text_size::{TextRange, TextSize};

/// A byte offset into a text buffer.
pub type ByteOffset = TextSize;

/// A pair of byte offsets into a buffer.
///
/// Unlike [`TextRange`], a span does not require `start <= end`. Queries that
/// only care about the distance between two positions accept either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// The first offset.
    pub start: ByteOffset,
    /// The second offset (exclusive when the span is ordered).
    pub end: ByteOffset,
}

impl Span {
    /// Creates a new span from two byte offsets.
    #[inline]
    pub fn new(start: impl Into<ByteOffset>, end: impl Into<ByteOffset>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Creates an empty span at the given offset.
    #[inline]
    pub fn empty(offset: impl Into<ByteOffset>) -> Self {
        let offset = offset.into();
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns true if `end` comes before `start`.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.end < self.start
    }

    /// Returns the same span with `start <= end`.
    #[inline]
    pub fn normalized(self) -> Span {
        if self.is_reversed() {
            Span {
                start: self.end,
                end: self.start,
            }
        } else {
            self
        }
    }

    /// Converts this span to a `TextRange`, ordering the offsets first.
    #[inline]
    pub fn to_range(self) -> TextRange {
        let span = self.normalized();
        TextRange::new(span.start, span.end)
    }
}

impl From<TextRange> for Span {
    fn from(range: TextRange) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
        }
    }
}

impl From<Span> for TextRange {
    fn from(span: Span) -> Self {
        span.to_range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_empty() {
        let span = Span::empty(5u32);
        assert!(!span.is_reversed());
        assert_eq!(span.to_range(), TextRange::empty(TextSize::from(5)));
    }

    #[test]
    fn test_reversed_span() {
        let span = Span::new(12u32, 4u32);
        assert!(span.is_reversed());
        assert_eq!(span.normalized(), Span::new(4u32, 12u32));
        assert_eq!(
            TextRange::from(span),
            TextRange::new(TextSize::from(4), TextSize::from(12))
        );
    }
}
