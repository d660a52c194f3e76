#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::keywords::{STATIC_TOKENS, TYPE_NAMES};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
}

fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text)
}

#[test]
fn every_static_token_lexes_alone() {
    for (text, kind) in STATIC_TOKENS {
        let tokens = tokenize(text).unwrap();
        assert_eq!(tokens, vec![tok(kind, text)], "{text}");
    }
}

#[test]
fn every_type_name_lexes_as_type() {
    for name in TYPE_NAMES {
        assert_eq!(tokenize(name).unwrap(), vec![tok(TokenKind::Type, name)]);
    }
}

#[test]
fn symbol_run_has_no_identifiers() {
    use TokenKind::*;
    assert_eq!(
        kinds("{}()<>,=+-/;"),
        vec![
            BraceOpen, BraceClose, ParenOpen, ParenClose, LessThan, GreaterThan, Comma, Equals,
            Plus, Minus, Divide, Semicolon,
        ]
    );
}

#[test]
fn function_declaration() {
    use TokenKind::*;
    let tokens = tokenize("fn takeSum(int a, int b) int { return a + b; }").unwrap();
    let expected = vec![
        tok(Function, "fn"),
        tok(Identifier, "takeSum"),
        tok(ParenOpen, "("),
        tok(Type, "int"),
        tok(Identifier, "a"),
        tok(Comma, ","),
        tok(Type, "int"),
        tok(Identifier, "b"),
        tok(ParenClose, ")"),
        tok(Type, "int"),
        tok(BraceOpen, "{"),
        tok(Return, "return"),
        tok(Identifier, "a"),
        tok(Plus, "+"),
        tok(Identifier, "b"),
        tok(Semicolon, ";"),
        tok(BraceClose, "}"),
    ];
    assert_eq!(tokens, expected);
}

#[test]
fn multiline_source_tracks_positions() {
    let source = "\n    fn takeSum(int a) int {\n        return a;\n    }\n";
    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens[0].position, Some(Position::new(2, 5)));
    assert_eq!(tokens[1].position, Some(Position::new(2, 8)));
    let ret = tokens.iter().find(|t| t.is(TokenKind::Return)).unwrap();
    assert_eq!(ret.position, Some(Position::new(3, 9)));
    assert_eq!(tokens.last().unwrap().position, Some(Position::new(4, 5)));
}

#[test]
fn lexer_iterator_yields_start_positions() {
    let positions: Vec<Position> = Lexer::new("fn  x\n(")
        .map(|token| token.unwrap().position.unwrap())
        .collect();
    assert_eq!(
        positions,
        vec![Position::new(1, 1), Position::new(1, 5), Position::new(2, 1)]
    );
}

#[test]
fn keyword_prefix_does_not_split_identifier() {
    assert_eq!(
        tokenize("forX integer mutable returned").unwrap(),
        vec![
            tok(TokenKind::Identifier, "forX"),
            tok(TokenKind::Identifier, "integer"),
            tok(TokenKind::Identifier, "mutable"),
            tok(TokenKind::Identifier, "returned"),
        ]
    );
}

#[test]
fn keyword_followed_by_symbol() {
    use TokenKind::*;
    assert_eq!(kinds("for(int"), vec![For, ParenOpen, Type]);
    assert_eq!(kinds("return;"), vec![Return, Semicolon]);
}

#[test]
fn adjacent_symbols_split() {
    use TokenKind::*;
    assert_eq!(kinds("a<=b"), vec![Identifier, LessThan, Equals, Identifier]);
    assert_eq!(kinds("x*y"), vec![Identifier, Multiply, Identifier]);
}

#[test]
fn numerals_are_literals() {
    assert_eq!(
        tokenize("0 12 1.5").unwrap(),
        vec![
            tok(TokenKind::Literal, "0"),
            tok(TokenKind::Literal, "12"),
            tok(TokenKind::Literal, "1.5"),
        ]
    );
}

#[test]
fn string_literal_keeps_quotes() {
    let tokens = tokenize(r#"print("wow!!!");"#).unwrap();
    assert_eq!(tokens[2], tok(TokenKind::Literal, "\"wow!!!\""));
    assert_eq!(
        tokens[2].literal_value(),
        Some(theatre_value::Value::string("wow!!!"))
    );
}

#[test]
fn loop_header() {
    use TokenKind::*;
    assert_eq!(
        kinds("for (int i = 0; i < 2; i)"),
        vec![
            For, ParenOpen, Type, Identifier, Equals, Literal, Semicolon, Identifier, LessThan,
            Literal, Semicolon, Identifier, ParenClose,
        ]
    );
}

#[test]
fn empty_and_blank_input() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize(" \t\r\n  ").unwrap().is_empty());
}

#[test]
fn stray_character_is_an_error() {
    let err = tokenize("a & b").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter { ch: '&' });
    assert_eq!(err.position, Position::new(1, 3));
}

#[test]
fn unterminated_string_is_an_error() {
    let err = tokenize("\"open\nclose\"").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.position, Position::START);
}

#[test]
fn identifier_length_limit() {
    let at_limit = "a".repeat(MAX_TOKEN_LEN);
    assert_eq!(tokenize(&at_limit).unwrap()[0].text, at_limit);

    let over = "a".repeat(MAX_TOKEN_LEN + 1);
    let err = tokenize(&over).unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::TokenTooLong {
            len: MAX_TOKEN_LEN + 1,
            limit: MAX_TOKEN_LEN,
        }
    );
}

#[test]
fn lexer_stops_after_error() {
    let mut lexer = Lexer::new("a # b");
    assert!(lexer.next().unwrap().is_ok());
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
}

mod proptest_lexer {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn never_panics(source in "\\PC{0,64}") {
            let _ = tokenize(&source);
        }

        #[test]
        fn words_lex_to_one_token(word in "[a-zA-Z]{1,32}") {
            let tokens = tokenize(&word).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(&tokens[0].text, &word);
        }

        #[test]
        fn token_texts_cover_non_whitespace(source in "[a-z(){};=+ \n]{0,64}") {
            let tokens = tokenize(&source).unwrap();
            let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
            let expected: String = source.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(joined, expected);
        }
    }
}
