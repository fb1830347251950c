//! Lexer using logos.
//!
//! Unlike a compiler lexer, nothing is skipped: whitespace and comments come
//! out as tokens so the tree can reproduce the source byte for byte.

use logos::Logos;
use text_buffer::Span;
use text_size::TextSize;

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span of the token in the source.
    pub span: Span,
}

/// Token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos, Default)]
pub enum TokenKind {
    // === Trivia ===
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    /// `// ...` up to the end of the line.
    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    /// `/* ... */`
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // === Keywords ===
    /// `let`
    #[token("let")]
    Let,

    // === Punctuation ===
    /// `(`
    #[token("(")]
    LParen,

    /// `)`
    #[token(")")]
    RParen,

    /// `{`
    #[token("{")]
    LBrace,

    /// `}`
    #[token("}")]
    RBrace,

    /// `,`
    #[token(",")]
    Comma,

    /// `;`
    #[token(";")]
    Semicolon,

    /// `=`
    #[token("=")]
    Eq,

    /// `.`
    #[token(".")]
    Dot,

    /// A single-character binary operator.
    #[regex(r"[+\-*/%<>!&|]")]
    Operator,

    // === Atoms ===
    /// An identifier.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    /// An integer or decimal number.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// A double-quoted string.
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    /// End of file
    Eof,

    /// Invalid/unknown token
    #[default]
    Error,
}

impl TokenKind {
    /// Returns true for whitespace and comments.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }

    /// Returns a human-readable name for this token kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::LineComment | TokenKind::BlockComment => "comment",
            TokenKind::Let => "'let'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::Eq => "'='",
            TokenKind::Dot => "'.'",
            TokenKind::Operator => "operator",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Eof => "end of file",
            TokenKind::Error => "invalid token",
        }
    }
}

/// A lexer over a source string.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
            source,
            finished: false,
        }
    }
}

fn span_of(range: std::ops::Range<usize>) -> Span {
    Span::new(
        TextSize::from(range.start as u32),
        TextSize::from(range.end as u32),
    )
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(kind)) => Some(Token {
                kind,
                span: span_of(self.inner.span()),
            }),
            Some(Err(())) => Some(Token {
                kind: TokenKind::Error,
                span: span_of(self.inner.span()),
            }),
            None => {
                self.finished = true;
                let end = TextSize::from(self.source.len() as u32);
                Some(Token {
                    kind: TokenKind::Eof,
                    span: Span::empty(end),
                })
            }
        }
    }
}
