//! Static symbol, keyword and type-name tables.
//!
//! Lookup is an exact match on the candidate text. Longest-match selection
//! happens in the lexer, which offers progressively narrower windows.

use crate::token::TokenKind;

/// Tokens whose text is known up front.
pub const STATIC_TOKENS: [(&str, TokenKind); 17] = [
    ("fn", TokenKind::Function),
    ("(", TokenKind::ParenOpen),
    (")", TokenKind::ParenClose),
    (",", TokenKind::Comma),
    ("{", TokenKind::BraceOpen),
    ("}", TokenKind::BraceClose),
    ("for", TokenKind::For),
    ("=", TokenKind::Equals),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Multiply),
    ("/", TokenKind::Divide),
    (";", TokenKind::Semicolon),
    ("<", TokenKind::LessThan),
    (">", TokenKind::GreaterThan),
    ("return", TokenKind::Return),
    ("mut", TokenKind::Mut),
];

/// Built-in type names, all lexed as [`TokenKind::Type`].
pub const TYPE_NAMES: [&str; 5] = ["mono", "int", "float", "bool", "string"];

/// Resolve text against the static table, then the type table.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "fn" => TokenKind::Function,
        "(" => TokenKind::ParenOpen,
        ")" => TokenKind::ParenClose,
        "," => TokenKind::Comma,
        "{" => TokenKind::BraceOpen,
        "}" => TokenKind::BraceClose,
        "for" => TokenKind::For,
        "=" => TokenKind::Equals,
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Multiply,
        "/" => TokenKind::Divide,
        ";" => TokenKind::Semicolon,
        "<" => TokenKind::LessThan,
        ">" => TokenKind::GreaterThan,
        "return" => TokenKind::Return,
        "mut" => TokenKind::Mut,
        "mono" | "int" | "float" | "bool" | "string" => TokenKind::Type,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_agrees_with_static_table() {
        for (text, kind) in STATIC_TOKENS {
            assert_eq!(lookup(text), Some(kind), "{text}");
        }
    }

    #[test]
    fn type_names_resolve_to_type() {
        for name in TYPE_NAMES {
            assert_eq!(lookup(name), Some(TokenKind::Type), "{name}");
        }
    }

    #[test]
    fn non_keywords_miss() {
        assert_eq!(lookup("fo"), None);
        assert_eq!(lookup("forX"), None);
        assert_eq!(lookup("integer"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("=="), None);
    }
}
