//! Parser configuration.
//!
//! The defaults reproduce the grammar exactly: the file is reported as
//! `shell` and arithmetic operators are recognised by their token text.
//! Parenthesised groups may nest up to [`DEFAULT_MAX_NESTING_DEPTH`] deep.

use crate::lexer::tokens::{Token, TokenKind};

/// Default limit on nested parentheses before parsing fails.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// How the expression tiers decide that a token is an arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorMatching {
    /// Any token whose text is `+`, `-`, `*`, `/` or `%` is an operator,
    /// whatever kind the scanner gave it.
    #[default]
    Lexeme,
    /// Only the dedicated operator token kinds are operators.
    TokenKind,
}

impl OperatorMatching {
    /// Returns the operator text of `token` if it counts as an operator under this mode.
    pub fn operator_text<'a>(&self, token: &'a Token) -> Option<&'a str> {
        match self {
            OperatorMatching::Lexeme => Some(token.value.as_str()),
            OperatorMatching::TokenKind => match token.kind {
                TokenKind::Plus
                | TokenKind::Dash
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent => Some(token.value.as_str()),
                _ => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Name reported in token positions; `None` means `shell`.
    pub file: Option<String>,
    pub operator_matching: OperatorMatching,
    /// Deepest parenthesis nesting accepted; one more level is a parse error.
    pub max_nesting_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            file: None,
            operator_matching: OperatorMatching::default(),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn file_name(&self) -> String {
        self.file.clone().unwrap_or_else(|| String::from("shell"))
    }
}
