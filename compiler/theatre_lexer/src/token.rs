//! Lexical tokens.

use std::fmt;
use std::hash::{Hash, Hasher};

use theatre_value::Value;

use crate::keywords::STATIC_TOKENS;

/// Token classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Function,
    Identifier,
    Literal,
    ParenOpen,
    ParenClose,
    Comma,
    Type,
    BraceOpen,
    BraceClose,
    For,
    Equals,
    Plus,
    Minus,
    Multiply,
    Divide,
    Semicolon,
    LessThan,
    GreaterThan,
    Return,
    Mut,
}

impl TokenKind {
    /// Upper-case name used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Function => "FUNCTION",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Literal => "LITERAL",
            TokenKind::ParenOpen => "PAREN_OPEN",
            TokenKind::ParenClose => "PAREN_CLOSE",
            TokenKind::Comma => "COMMA",
            TokenKind::Type => "TYPE",
            TokenKind::BraceOpen => "BRACE_OPEN",
            TokenKind::BraceClose => "BRACE_CLOSE",
            TokenKind::For => "FOR",
            TokenKind::Equals => "EQUALS",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::Return => "RETURN",
            TokenKind::Mut => "MUT",
        }
    }

    /// Fixed source text for kinds in the static table.
    ///
    /// `None` for identifiers, literals and type names, whose text varies.
    pub fn fixed_text(self) -> Option<&'static str> {
        STATIC_TOKENS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(text, _)| *text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 1-based source position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { row: 1, column: 1 };

    pub const fn new(row: u32, column: u32) -> Self {
        Position { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// A classified lexeme.
///
/// Equality and hashing look at `kind` and `text` only; `position` is
/// diagnostic metadata.
#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// `None` when the token was built by hand rather than scanned.
    pub position: Option<Position>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
            position: None,
        }
    }

    /// Canonical token for a kind with fixed text (`Token::of(TokenKind::Plus)`
    /// has text `+`).
    pub fn of(kind: TokenKind) -> Option<Self> {
        kind.fixed_text().map(|text| Token::new(kind, text))
    }

    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Runtime value of a literal token.
    ///
    /// String literals drop their surrounding quotes; numerals go through
    /// [`Value::parse`]. `None` for non-literal tokens.
    pub fn literal_value(&self) -> Option<Value> {
        if self.kind != TokenKind::Literal {
            return None;
        }
        let value = match self
            .text
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
        {
            Some(inner) => Value::string(inner),
            None => Value::parse(&self.text),
        };
        Some(value)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.text.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token( {} value='{}' )", self.kind, self.text)
    }
}
