use std::{iter::Peekable, slice};

use crate::{
    interpreter::lexer::{Token, TokenKind},
    span::Span,
};

/// One-token lookahead over a token slice.
///
/// Besides `peek` and `next`, the cursor knows where the input ends so that
/// running out of tokens can be reported at a real position.
pub struct TokenCursor<'a> {
    tokens:   Peekable<slice::Iter<'a, Token>>,
    consumed: usize,
    eof:      Span,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned at the first token.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{
    ///     lexer::{TokenKind, scan},
    ///     parser::cursor::TokenCursor,
    /// };
    ///
    /// let tokens = scan("a + b").success;
    /// let mut cursor = TokenCursor::new(&tokens);
    ///
    /// assert!(cursor.next_if(|kind| matches!(kind, TokenKind::Identifier(_))).is_some());
    /// assert!(cursor.next_if(|kind| *kind == TokenKind::Minus).is_none());
    /// assert_eq!(cursor.peek().map(|token| &token.kind), Some(&TokenKind::Plus));
    /// assert_eq!(cursor.eof().offset, 5);
    /// ```
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = tokens.last().map_or_else(Span::default, |token| token.span.after());

        Self { tokens: tokens.iter().peekable(),
               consumed: 0,
               eof }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Option<&'a Token> {
        self.tokens.peek().copied()
    }

    /// Returns `true` if the next token's kind satisfies `predicate`.
    pub fn check(&mut self, predicate: impl FnOnce(&TokenKind) -> bool) -> bool {
        self.peek().is_some_and(|token| predicate(&token.kind))
    }

    /// Consumes and returns the next token if its kind satisfies `predicate`.
    pub fn next_if(&mut self, predicate: impl FnOnce(&TokenKind) -> bool) -> Option<&'a Token> {
        let token = self.tokens.next_if(|token| predicate(&token.kind))?;
        self.consumed += 1;
        Some(token)
    }

    /// Returns `true` once every token has been consumed.
    pub fn is_at_end(&mut self) -> bool {
        self.tokens.peek().is_none()
    }

    /// Number of tokens consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.consumed
    }

    /// A zero-length span right after the last token.
    #[must_use]
    pub const fn eof(&self) -> Span {
        self.eof
    }
}

impl<'a> Iterator for TokenCursor<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        self.consumed += 1;
        Some(token)
    }
}
