//! Lossless syntax trees for linemap.
//!
//! This crate provides:
//! - Lexer (tokenizer) using `logos`, keeping whitespace and comments
//! - Recursive descent parser for a small statement/expression language
//! - A `rowan` tree in which every byte of the source is owned by a token
//! - Error recovery for partial parsing
//!
//! # Example
//!
//! ```
//! use syntax::{parse, SyntaxKind};
//!
//! let parse = parse("let answer = compute(41, 1);\n// done\n");
//! assert!(parse.errors.is_empty());
//!
//! let root = parse.syntax_node();
//! assert_eq!(root.kind(), SyntaxKind::SourceFile);
//! ```

mod error;
mod lexer;
mod parser;
mod syntax_kind;

use std::fmt::Write;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Lexer, Token, TokenKind};
pub use rowan::{GreenNode, NodeOrToken, TextRange, TextSize};
pub use syntax_kind::{Lang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// The result of parsing a source file.
#[derive(Debug, Clone)]
pub struct Parse {
    /// The immutable green tree.
    pub green: GreenNode,
    /// Any errors encountered during parsing.
    pub errors: Vec<ParseError>,
}

impl Parse {
    /// Returns a fresh root node over the green tree.
    pub fn syntax_node(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }
}

/// Parses a source file.
///
/// Parsing never fails: malformed input produces `Error` nodes and entries in
/// [`Parse::errors`], and the tree still covers the whole source.
pub fn parse(source: &str) -> Parse {
    parser::Parser::new(source).parse()
}

/// Returns the leaf token whose range contains `offset`.
///
/// At a boundary between two tokens, the token starting at `offset` wins.
/// Returns `None` when `offset` is at or past the end of the tree.
pub fn token_at(root: &SyntaxNode, offset: TextSize) -> Option<SyntaxToken> {
    if offset >= root.text_range().end() {
        return None;
    }
    root.token_at_offset(offset)
        .right_biased()
        .filter(|token| token.text_range().contains(offset))
}

/// Renders a tree as an indented outline, one element per line.
pub fn debug_tree(node: &SyntaxNode) -> String {
    let mut out = String::new();
    let mut depth = 0usize;

    for event in node.preorder_with_tokens() {
        match event {
            rowan::WalkEvent::Enter(element) => {
                let indent = "  ".repeat(depth);
                let _ = match &element {
                    NodeOrToken::Node(node) => {
                        writeln!(out, "{indent}{:?}@{:?}", node.kind(), node.text_range())
                    }
                    NodeOrToken::Token(token) => writeln!(
                        out,
                        "{indent}{:?}@{:?} {:?}",
                        token.kind(),
                        token.text_range(),
                        token.text()
                    ),
                };
                if element.as_node().is_some() {
                    depth += 1;
                }
            }
            rowan::WalkEvent::Leave(element) => {
                if element.as_node().is_some() {
                    depth -= 1;
                }
            }
        }
    }

    out
}
