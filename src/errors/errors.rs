use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::Token, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Builds an `UnexpectedToken` error positioned at the start of `token`.
    pub fn unexpected(token: &Token, message: impl Into<String>) -> Self {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.clone(),
                message: message.into(),
            },
            token.span.start.clone(),
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    /// The human-readable message without the offending token.
    pub fn message(&self) -> String {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => String::from("unrecognised character"),
            ErrorImpl::UnexpectedToken { message, .. } => message.clone(),
            ErrorImpl::NumberParseError { .. } => String::from("invalid numeric literal"),
        }
    }

    /// The token the parser was looking at when it failed. Scanner errors have none.
    pub fn token(&self) -> Option<&Token> {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => None,
            ErrorImpl::UnexpectedToken { token, .. } => Some(token),
            ErrorImpl::NumberParseError { token } => Some(token),
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } if token.is_empty() => ErrorTip::None,
            ErrorImpl::UnrecognisedToken { token } => ErrorTip::Suggestion(format!(
                "Character `{}` is not part of the language",
                token
            )),
            ErrorImpl::UnexpectedToken { token, message } if token.is_eof() => {
                ErrorTip::Suggestion(format!("Input ended early, {}", message))
            }
            ErrorImpl::UnexpectedToken { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token.value, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it too large to be finite?",
                token.value
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("{message}: found {token}")]
    UnexpectedToken { token: Token, message: String },
    #[error("error parsing number: {:?}", .token.value)]
    NumberParseError { token: Token },
}
