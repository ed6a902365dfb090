//! Error types for probe script parsing

use crate::btrace::ast::Position;
use crate::btrace::lexer::Token;
use serde::Serialize;
use thiserror::Error;

/// Which grammar rule was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParseErrorKind {
    /// An explicit probe kind other than `p` or `r`
    InvalidProbeType,
    /// A builtin probe (`::name`) written with a library segment
    BuiltinLibrary,
    /// No identifier where the function name belongs
    MissingFunction,
    /// Something other than `(`, `/` or `{` after the function name
    ExpectedPredicateOrAction,
    /// No `{` where the action block belongs
    MissingActionBlock,
    /// Any other token in the wrong place
    UnexpectedToken,
}

/// A structural error with the position of the offending token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error at {position}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: Position, message: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            message: message.into(),
        }
    }

    /// Build an error pointing at `token`, appending what was actually found
    pub fn at_token(kind: ParseErrorKind, token: &Token<'_>, message: &str) -> Self {
        Self::new(
            kind,
            token.position,
            format!("{}, found {}", message, token.describe()),
        )
    }
}
