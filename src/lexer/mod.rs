//! Lexical analysis module.
//!
//! Converts source text into the token sequence the parser consumes:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of the `let` / `const` keywords, identifiers and numbers
//! - Arithmetic operators and punctuation
//! - Token spans for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
