//! Forward-only cursor over a scanned token sequence.

use crate::{
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

/// An index into an owned token array that always ends with an `EOF` sentinel.
///
/// The cursor only ever moves forward, one token at a time, and never past
/// the sentinel. Cloning it gives an independent lookahead copy.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    /// Wraps `tokens`, appending an `EOF` sentinel if the sequence lacks one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens
                .last()
                .map(|token| token.span.end.clone())
                .unwrap_or_else(Position::null);

            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: end.clone(),
                    end
                }
            ));
        }

        TokenCursor { tokens, pos: 0 }
    }

    pub fn at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Consumes the current token. At the sentinel the cursor stays put.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if !self.tokens[current].is_eof() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Consumes the current token if it is of `kind`, otherwise fails with `message`.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, Error> {
        if self.peek().kind != kind {
            return Err(Error::unexpected(self.peek(), message));
        }

        Ok(self.advance().clone())
    }

    /// Index of the token under the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Tokens left before the sentinel.
    pub fn remaining(&self) -> usize {
        self.tokens[self.pos..]
            .iter()
            .take_while(|token| !token.is_eof())
            .count()
    }
}
