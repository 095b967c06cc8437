//! Unit tests for error handling.

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, Span};

fn token_at(kind: TokenKind, value: &str, offset: u32) -> Token {
    let file = Rc::new("test.lang".to_string());
    Token {
        kind,
        value: value.to_string(),
        span: Span {
            start: Position(offset, Rc::clone(&file)),
            end: Position(offset + value.len() as u32, file),
        },
    }
}

#[test]
fn test_unrecognised_token_error() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
    assert_eq!(error.message(), "unrecognised character");
    assert!(error.token().is_none());
    assert_eq!(error.to_string(), "unrecognised character: \"@\"");
}

#[test]
fn test_unexpected_token_uses_token_position() {
    let token = token_at(TokenKind::Semicolon, ";", 7);
    let error = Error::unexpected(&token, "unexpected token in expression");

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 7);
    assert_eq!(error.message(), "unexpected token in expression");
    assert_eq!(error.token(), Some(&token));
    assert_eq!(
        error.to_string(),
        "unexpected token in expression: found Semicolon `;`"
    );
}

#[test]
fn test_number_parse_error() {
    let token = token_at(TokenKind::Number, "99", 0);
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: token.clone(),
        },
        token.span.start.clone(),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.to_string(), "error parsing number: \"99\"");
    assert!(matches!(error.get_impl(), ErrorImpl::NumberParseError { .. }));
}

#[test]
fn test_error_tips() {
    let semicolon = token_at(TokenKind::Semicolon, ";", 3);
    let tip = Error::unexpected(&semicolon, "constant must have an initializer").get_tip();
    assert_eq!(
        tip.to_string(),
        "Unexpected token: `;`, constant must have an initializer"
    );

    let eof = token_at(TokenKind::EOF, "EOF", 6);
    let tip = Error::unexpected(&eof, "expected closing parenthesis").get_tip();
    assert_eq!(tip.to_string(), "Input ended early, expected closing parenthesis");

    let empty = Error::new(ErrorImpl::UnrecognisedToken { token: String::new() }, Position::null());
    assert!(matches!(empty.get_tip(), ErrorTip::None));
}
