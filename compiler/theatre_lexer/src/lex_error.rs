//! Lexer errors.

use crate::token::Position;

/// A lexer failure at a source position.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
}

/// What went wrong while scanning.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    /// Nothing in the static, type, identifier or literal tables starts here.
    #[error("unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char },
    /// Lexeme exceeds [`MAX_TOKEN_LEN`](crate::MAX_TOKEN_LEN) characters.
    #[error("token is {len} characters long (limit {limit})")]
    TokenTooLong { len: usize, limit: usize },
    /// String literal not closed before end of line.
    #[error("unterminated string literal")]
    UnterminatedString,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Position) -> Self {
        LexError { kind, position }
    }
}
