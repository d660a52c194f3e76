//! Longest-match scanner.
//!
//! At every position the lexer tries, in order:
//! 1. the static and type tables, widest window first
//! 2. an alphabetic identifier run
//! 3. a numeral or double-quoted string literal
//!
//! Static matches come first at every position, so `return` is a keyword
//! and never an identifier. A keyword match that ends in a letter must also
//! end on a word boundary: `forX` and `integer` are identifiers.

use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};
use crate::token::{Position, Token, TokenKind};

/// Maximum number of characters in a single lexeme.
pub const MAX_TOKEN_LEN: usize = 63;

/// Streaming tokenizer over a source string.
///
/// Yields tokens until the input is exhausted or the first error; after an
/// error the iterator is finished.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    row: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            pos: 0,
            row: Position::START.row,
            column: Position::START.column,
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Position of the next unread character.
    fn current_position(&self) -> Position {
        Position::new(self.row, self.column)
    }

    fn bump(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.row += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .find(|(_, ch)| !ch.is_whitespace())
            .map_or(rest.len(), |(i, _)| i);
        self.bump(&rest[..end]);
    }

    fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        self.skip_whitespace();
        let rest = self.rest();
        let first = rest.chars().next()?;
        let start = self.current_position();

        let scanned = match_static(rest)
            .map(Ok)
            .or_else(|| scan_identifier(rest).map(|text| Ok((TokenKind::Identifier, text))))
            .or_else(|| scan_literal(rest).map(|lit| lit.map(|text| (TokenKind::Literal, text))))
            .unwrap_or_else(|| Err(LexErrorKind::UnexpectedCharacter { ch: first }))
            .and_then(|(kind, text)| {
                let len = text.chars().count();
                if len > MAX_TOKEN_LEN {
                    Err(LexErrorKind::TokenTooLong {
                        len,
                        limit: MAX_TOKEN_LEN,
                    })
                } else {
                    Ok((kind, text))
                }
            });

        match scanned {
            Ok((kind, text)) => {
                self.bump(text);
                tracing::trace!(%kind, text, %start, "token");
                Some(Ok(Token::new(kind, text).at(start)))
            }
            Err(kind) => {
                // Fuse: nothing more is produced after an error.
                self.pos = self.source.len();
                Some(Err(LexError::new(kind, start)))
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Widest static or type-name match at the start of `rest`.
fn match_static(rest: &str) -> Option<(TokenKind, &str)> {
    let window_end = rest
        .char_indices()
        .nth(MAX_TOKEN_LEN)
        .map_or(rest.len(), |(i, _)| i);
    let window = &rest[..window_end];

    window
        .char_indices()
        .rev()
        .map(|(i, ch)| i + ch.len_utf8())
        .find_map(|end| {
            let candidate = &window[..end];
            let kind = keywords::lookup(candidate)?;
            if ends_mid_word(candidate, &rest[end..]) {
                return None;
            }
            Some((kind, candidate))
        })
}

fn ends_mid_word(candidate: &str, following: &str) -> bool {
    let last_is_letter = candidate.chars().next_back().is_some_and(char::is_alphabetic);
    let next_is_letter = following.chars().next().is_some_and(char::is_alphabetic);
    last_is_letter && next_is_letter
}

/// Run of alphabetic characters at the start of `rest`.
fn scan_identifier(rest: &str) -> Option<&str> {
    let end = rest
        .char_indices()
        .find(|(_, ch)| !ch.is_alphabetic())
        .map_or(rest.len(), |(i, _)| i);
    (end > 0).then(|| &rest[..end])
}

/// Numeral (`12`, `1.5`) or double-quoted string at the start of `rest`.
fn scan_literal(rest: &str) -> Option<Result<&str, LexErrorKind>> {
    let first = rest.chars().next()?;
    if first.is_ascii_digit() {
        return Some(Ok(scan_numeral(rest)));
    }
    if first == '"' {
        let body = &rest[1..];
        let close = body.find(['"', '\n']);
        return Some(match close {
            Some(i) if body[i..].starts_with('"') => Ok(&rest[..i + 2]),
            _ => Err(LexErrorKind::UnterminatedString),
        });
    }
    None
}

fn scan_numeral(rest: &str) -> &str {
    let digits_end = |s: &str| s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let int_end = digits_end(rest);
    let after = &rest[int_end..];
    if let Some(fraction) = after.strip_prefix('.') {
        let frac_len = digits_end(fraction);
        if frac_len > 0 {
            return &rest[..int_end + 1 + frac_len];
        }
    }
    &rest[..int_end]
}

/// Tokenize a whole source string.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

#[cfg(test)]
mod tests;
