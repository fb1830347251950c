//! Syntax kinds and the rowan language definition.

use crate::lexer::TokenKind;

/// Kinds of tokens and nodes in the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    Whitespace,
    Comment,
    LetKw,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Semicolon,
    Eq,
    Dot,
    Operator,
    Ident,
    Number,
    String,
    ErrorToken,

    // Nodes
    SourceFile,
    LetStmt,
    ExprStmt,
    Block,
    Name,
    NameRef,
    Literal,
    ParenExpr,
    CallExpr,
    ArgList,
    FieldExpr,
    BinaryExpr,
    Error,
}

impl SyntaxKind {
    const ALL: [SyntaxKind; 29] = [
        SyntaxKind::Whitespace,
        SyntaxKind::Comment,
        SyntaxKind::LetKw,
        SyntaxKind::LParen,
        SyntaxKind::RParen,
        SyntaxKind::LBrace,
        SyntaxKind::RBrace,
        SyntaxKind::Comma,
        SyntaxKind::Semicolon,
        SyntaxKind::Eq,
        SyntaxKind::Dot,
        SyntaxKind::Operator,
        SyntaxKind::Ident,
        SyntaxKind::Number,
        SyntaxKind::String,
        SyntaxKind::ErrorToken,
        SyntaxKind::SourceFile,
        SyntaxKind::LetStmt,
        SyntaxKind::ExprStmt,
        SyntaxKind::Block,
        SyntaxKind::Name,
        SyntaxKind::NameRef,
        SyntaxKind::Literal,
        SyntaxKind::ParenExpr,
        SyntaxKind::CallExpr,
        SyntaxKind::ArgList,
        SyntaxKind::FieldExpr,
        SyntaxKind::BinaryExpr,
        SyntaxKind::Error,
    ];

    /// Returns the kind with the given raw value, if any.
    pub fn from_raw(raw: u16) -> Option<SyntaxKind> {
        Self::ALL.get(raw as usize).copied()
    }

    /// Returns true for whitespace and comment tokens.
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::Comment)
    }
}

impl From<TokenKind> for SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Whitespace => SyntaxKind::Whitespace,
            TokenKind::LineComment | TokenKind::BlockComment => SyntaxKind::Comment,
            TokenKind::Let => SyntaxKind::LetKw,
            TokenKind::LParen => SyntaxKind::LParen,
            TokenKind::RParen => SyntaxKind::RParen,
            TokenKind::LBrace => SyntaxKind::LBrace,
            TokenKind::RBrace => SyntaxKind::RBrace,
            TokenKind::Comma => SyntaxKind::Comma,
            TokenKind::Semicolon => SyntaxKind::Semicolon,
            TokenKind::Eq => SyntaxKind::Eq,
            TokenKind::Dot => SyntaxKind::Dot,
            TokenKind::Operator => SyntaxKind::Operator,
            TokenKind::Ident => SyntaxKind::Ident,
            TokenKind::Number => SyntaxKind::Number,
            TokenKind::String => SyntaxKind::String,
            TokenKind::Eof | TokenKind::Error => SyntaxKind::ErrorToken,
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// The rowan language tag for this syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lang {}

impl rowan::Language for Lang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
        SyntaxKind::from_raw(raw.0).unwrap_or(SyntaxKind::Error)
    }

    fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// A node in the syntax tree.
pub type SyntaxNode = rowan::SyntaxNode<Lang>;
/// A leaf token in the syntax tree.
pub type SyntaxToken = rowan::SyntaxToken<Lang>;
/// Either a node or a token.
pub type SyntaxElement = rowan::SyntaxElement<Lang>;
