//! [`TreeElement`] for the `syntax` crate's rowan elements.

use crate::tree::TreeElement;
use std::borrow::Cow;
use syntax::{NodeOrToken, SyntaxElement};
use text_size::TextRange;

impl TreeElement for SyntaxElement {
    fn text_range(&self) -> TextRange {
        SyntaxElement::text_range(self)
    }

    fn next_sibling(&self) -> Option<Self> {
        self.next_sibling_or_token()
    }

    fn parent(&self) -> Option<Self> {
        SyntaxElement::parent(self).map(NodeOrToken::Node)
    }

    fn is_trivia(&self) -> bool {
        self.kind().is_trivia()
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        Some(match self {
            NodeOrToken::Node(node) => Cow::Owned(node.text().to_string()),
            NodeOrToken::Token(token) => Cow::Borrowed(token.text()),
        })
    }
}
