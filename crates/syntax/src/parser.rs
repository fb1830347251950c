//! Recursive descent parser producing a lossless rowan tree.
//!
//! Trivia is attached to whichever node is open when the next significant
//! token is consumed. Nodes are always started after pending trivia has been
//! flushed, so a node never begins with whitespace or a comment.

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::syntax_kind::SyntaxKind;
use crate::Parse;
use rowan::{Checkpoint, GreenNodeBuilder};
use text_buffer::Span;

/// The parser.
pub struct Parser<'src> {
    /// The source being parsed.
    source: &'src str,
    /// Every token, trivia included, ending with `Eof`.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    /// Parse errors collected during parsing.
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a new parser.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Lexer::new(source).collect(),
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    /// Parses the source into a tree.
    pub fn parse(mut self) -> Parse {
        self.builder.start_node(SyntaxKind::SourceFile.into());
        while !self.at(TokenKind::Eof) {
            self.item();
        }
        self.eat_trivia();
        self.builder.finish_node();

        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // === Token cursor ===

    /// Index of the next significant token.
    fn peek_index(&self) -> usize {
        let mut index = self.pos;
        while index < self.tokens.len() && self.tokens[index].kind.is_trivia() {
            index += 1;
        }
        index
    }

    /// Kind of the next significant token.
    fn current(&self) -> TokenKind {
        self.tokens
            .get(self.peek_index())
            .map(|t| t.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn current_span(&self) -> Span {
        self.tokens
            .get(self.peek_index())
            .map(|t| t.span)
            .unwrap_or_else(|| Span::empty(text_size::TextSize::from(self.source.len() as u32)))
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    fn push_token(&mut self, token: &Token) {
        let range = token.span.to_range();
        let text = &self.source[usize::from(range.start())..usize::from(range.end())];
        self.builder.token(SyntaxKind::from(token.kind).into(), text);
    }

    /// Adds pending trivia to the open node.
    fn eat_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            let token = token.clone();
            self.push_token(&token);
            self.pos += 1;
        }
    }

    /// Adds pending trivia and the next significant token to the open node.
    fn bump(&mut self) {
        self.eat_trivia();
        if let Some(token) = self.tokens.get(self.pos).cloned() {
            if token.kind != TokenKind::Eof {
                self.push_token(&token);
                self.pos += 1;
            }
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error_expected(kind.name());
        false
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        self.eat_trivia();
        self.builder.start_node(kind.into());
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.eat_trivia();
        self.builder.checkpoint()
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn error_expected(&mut self, expected: &str) {
        let found = self.current();
        let kind = if found == TokenKind::Eof {
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            }
        } else {
            ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found: found.name().to_string(),
            }
        };
        let span = self.current_span();
        self.errors.push(ParseError::new(kind, span));
    }

    /// Wraps the next token in an error node so parsing always advances.
    fn error_recover(&mut self, expected: &str) {
        self.error_expected(expected);
        if self.at(TokenKind::Eof) {
            return;
        }
        self.start_node(SyntaxKind::Error);
        self.bump();
        self.finish_node();
    }

    // === Grammar ===

    fn item(&mut self) {
        match self.current() {
            TokenKind::Let => self.let_stmt(),
            TokenKind::RBrace => self.error_recover("item"),
            _ => self.expr_stmt(),
        }
    }

    fn let_stmt(&mut self) {
        self.start_node(SyntaxKind::LetStmt);
        self.bump();

        if self.at(TokenKind::Ident) {
            self.start_node(SyntaxKind::Name);
            self.bump();
            self.finish_node();
        } else {
            self.error_expected("identifier");
        }

        if self.expect(TokenKind::Eq) {
            self.expr();
        }
        self.eat(TokenKind::Semicolon);
        self.finish_node();
    }

    fn expr_stmt(&mut self) {
        self.start_node(SyntaxKind::ExprStmt);
        self.expr();
        self.eat(TokenKind::Semicolon);
        self.finish_node();
    }

    fn block(&mut self) {
        let open = self.current_span();
        self.start_node(SyntaxKind::Block);
        self.bump();
        while !self.at(TokenKind::RBrace) && !self.at(TokenKind::Eof) {
            self.item();
        }
        if !self.eat(TokenKind::RBrace) {
            self.errors.push(ParseError::new(
                ParseErrorKind::UnclosedDelimiter { delimiter: '{' },
                open,
            ));
        }
        self.finish_node();
    }

    fn expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.postfix_expr();
        while self.at(TokenKind::Operator) {
            self.builder
                .start_node_at(checkpoint, SyntaxKind::BinaryExpr.into());
            self.bump();
            self.postfix_expr();
            self.finish_node();
        }
    }

    fn postfix_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.atom();
        loop {
            match self.current() {
                TokenKind::LParen => {
                    self.builder
                        .start_node_at(checkpoint, SyntaxKind::CallExpr.into());
                    self.arg_list();
                    self.finish_node();
                }
                TokenKind::Dot => {
                    self.builder
                        .start_node_at(checkpoint, SyntaxKind::FieldExpr.into());
                    self.bump();
                    if self.at(TokenKind::Ident) {
                        self.start_node(SyntaxKind::NameRef);
                        self.bump();
                        self.finish_node();
                    } else {
                        self.error_expected("field name");
                    }
                    self.finish_node();
                }
                _ => break,
            }
        }
    }

    fn arg_list(&mut self) {
        let open = self.current_span();
        self.start_node(SyntaxKind::ArgList);
        self.bump();
        while !self.at(TokenKind::RParen) && !self.at(TokenKind::Eof) {
            self.expr();
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        if !self.eat(TokenKind::RParen) {
            self.errors.push(ParseError::new(
                ParseErrorKind::UnclosedDelimiter { delimiter: '(' },
                open,
            ));
        }
        self.finish_node();
    }

    fn atom(&mut self) {
        match self.current() {
            TokenKind::Ident => {
                self.start_node(SyntaxKind::NameRef);
                self.bump();
                self.finish_node();
            }
            TokenKind::Number | TokenKind::String => {
                self.start_node(SyntaxKind::Literal);
                self.bump();
                self.finish_node();
            }
            TokenKind::LParen => {
                let open = self.current_span();
                self.start_node(SyntaxKind::ParenExpr);
                self.bump();
                self.expr();
                if !self.eat(TokenKind::RParen) {
                    self.errors.push(ParseError::new(
                        ParseErrorKind::UnclosedDelimiter { delimiter: '(' },
                        open,
                    ));
                }
                self.finish_node();
            }
            TokenKind::LBrace => self.block(),
            _ => self.error_recover("expression"),
        }
    }
}
