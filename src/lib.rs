#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{ast::ast::Program, errors::errors::Error, lexer::lexer::tokenize};

pub mod ast;
pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use config::{OperatorMatching, ParserConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Scans and parses `source` into a [`Program`] using the default configuration.
///
/// Each call builds its own token sequence and parser, so the returned tree
/// shares nothing with any other invocation.
pub fn parse(source: &str) -> Result<Program, Error> {
    parse_with_config(source, &ParserConfig::default())
}

/// Scans and parses `source` with an explicit [`ParserConfig`].
pub fn parse_with_config(source: &str, config: &ParserConfig) -> Result<Program, Error> {
    let tokens = tokenize(source, Some(config.file_name()))?;
    parser::parser::parse(tokens, config)
}
