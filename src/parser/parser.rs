//! Parser state and the token-level `parse` driver.
//!
//! The `Parser` owns a `TokenCursor` plus the lookup tables that map a
//! token kind to the statement or prefix-expression handler for it.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{ast::Program, expressions::BinaryOperator},
    config::{OperatorMatching, ParserConfig},
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    cursor::TokenCursor,
    lookups::{create_token_lookups, BindingPower, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The parsing state of one invocation.
///
/// A parser is created by [`parse`] for a single token sequence and dropped
/// when it returns; it is never shared or reused.
pub struct Parser {
    /// Cursor over the tokens being parsed
    cursor: TokenCursor,
    /// How binary operators are recognised
    operator_matching: OperatorMatching,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Parenthesised groups currently open
    nesting_depth: usize,
    /// Deepest nesting accepted before failing
    max_nesting_depth: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// # Arguments
    ///
    /// * `tokens` - Vector of tokens to parse; an `EOF` sentinel is added if missing
    /// * `config` - Operator matching mode and nesting limit to parse with
    ///
    /// # Returns
    ///
    /// A Parser with empty lookup tables, positioned at the first token.
    pub fn new(tokens: Vec<Token>, config: &ParserConfig) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens),
            operator_matching: config.operator_matching,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            nesting_depth: 0,
            max_nesting_depth: config.max_nesting_depth,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.cursor.peek()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cursor.peek().kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        self.cursor.advance()
    }

    /// Expects a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `message` - Message of the error raised when the current token differs
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) and advances if the current token matches, otherwise
    /// returns an `UnexpectedToken` error without advancing.
    pub fn expect_error(&mut self, expected_kind: TokenKind, message: &str) -> Result<Token, Error> {
        self.cursor.expect(expected_kind, message)
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        !self.cursor.at_end()
    }

    /// Returns the operator under the cursor if it belongs to a precedence tier.
    ///
    /// # Arguments
    ///
    /// * `bp` - The tier being parsed; operators of other tiers are ignored
    ///
    /// # Returns
    ///
    /// The operator, or None when the current token is not an operator of `bp`.
    pub fn current_operator(&self, bp: BindingPower) -> Option<BinaryOperator> {
        self.operator_matching
            .operator_text(self.current_token())
            .and_then(BinaryOperator::from_lexeme)
            .filter(|operator| operator.binding_power() == bp)
    }

    /// Enters one parenthesised group.
    ///
    /// # Arguments
    ///
    /// * `open` - The `(` token opening the group, reported if the limit is exceeded
    ///
    /// # Returns
    ///
    /// Returns an error once more groups are open than the configured limit allows.
    pub fn enter_group(&mut self, open: &Token) -> Result<(), Error> {
        self.nesting_depth += 1;
        if self.nesting_depth > self.max_nesting_depth {
            return Err(Error::unexpected(open, "expression nested too deeply"));
        }
        Ok(())
    }

    /// Leaves the innermost parenthesised group.
    pub fn exit_group(&mut self) {
        self.nesting_depth = self.nesting_depth.saturating_sub(1);
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for expressions starting with `kind`
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for statements starting with `kind`
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a sequence of tokens into a [`Program`].
///
/// Statements are parsed until `EOF`. The first grammar violation aborts the
/// whole parse; no partial tree is returned.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `config` - Operator matching mode and nesting limit
///
/// # Returns
///
/// The `Program` holding every statement in source order, or the first Error.
pub fn parse(tokens: Vec<Token>, config: &ParserConfig) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, config);
    create_token_lookups(&mut parser);

    debug!(
        tokens = parser.cursor.remaining(),
        matching = ?config.operator_matching,
        "parsing program"
    );

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    debug!(statements = body.len(), "parsed program");

    Ok(Program { body })
}
