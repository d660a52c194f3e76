//! Theatre Lexer - tokenizer for Theatre Script source text.
//!
//! Converts source text into an ordered sequence of [`Token`]s using
//! longest-match scanning over a static symbol/keyword table and a type-name
//! table, with an alphabetic identifier fallback.
//!
//! # Tracing
//!
//! - `RUST_LOG=theatre_lexer=debug`: one span per [`tokenize`] call.
//! - `RUST_LOG=theatre_lexer=trace`: one event per token.

mod keywords;
pub mod lex_error;
mod lexer;
mod token;

pub use keywords::{STATIC_TOKENS, TYPE_NAMES};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{tokenize, Lexer, MAX_TOKEN_LEN};
pub use token::{Position, Token, TokenKind};
