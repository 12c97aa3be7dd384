//! Contains the `SyntaxError` type returned by every parsing operation.
use crate::token::{Position, TokenKind};
use thiserror::Error;

/// The single error type for validation and parsing.
///
/// The message names what was expected and the literal text actually seen.
/// The source location travels alongside it and is available through
/// [`SyntaxError::position`], but is not part of the message.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SyntaxError {
    /// A token that cannot start an element (arrays, numbers, `:`, EOF...).
    #[error("unsupported token {literal:?}")]
    UnsupportedToken { literal: String, position: Position },

    /// A specific token kind was required and something else was found.
    #[error("expected '{expected}', found {found:?}")]
    UnexpectedToken {
        expected: TokenKind,
        found: String,
        position: Position,
    },

    /// Objects were nested deeper than the parser allows.
    #[error("maximum nesting depth of {limit} exceeded")]
    NestingTooDeep { limit: usize, position: Position },

    /// The input was rejected by the size limit before tokenizing.
    #[error("input of {size} bytes exceeds the maximum of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

impl SyntaxError {
    /// Where the error was detected, if it is tied to a token.
    pub fn position(&self) -> Option<Position> {
        match self {
            SyntaxError::UnsupportedToken { position, .. }
            | SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::NestingTooDeep { position, .. } => Some(*position),
            SyntaxError::InputTooLarge { .. } => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SyntaxError>;
