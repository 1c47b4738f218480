//! Integration tests for end-to-end tokenization.
//!
//! These tests drive the public API the way a parser would: whole programs in,
//! token sequences or a rendered diagnostic out.

use lexico::{format_error, tokenize, Token, TokenKind};
use std::thread;

fn lex(source: &str) -> Result<Vec<Token>, lexico::errors::errors::Error> {
    tokenize(source.to_string(), Some("test.txt".to_string()))
}

fn tok(kind: TokenKind, lexeme: &str) -> Token {
    Token::new(kind, lexeme)
}

#[test]
fn test_single_keyword() {
    assert_eq!(lex("si").unwrap(), vec![tok(TokenKind::If, "si")]);
}

#[test]
fn test_conditional_statement() {
    let tokens = lex("si aa entonces bb() sino cc()").unwrap();

    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::If, "si"),
            tok(TokenKind::Identifier, "aa"),
            tok(TokenKind::Then, "entonces"),
            tok(TokenKind::Identifier, "bb"),
            tok(TokenKind::ParenOpen, "("),
            tok(TokenKind::ParenClose, ")"),
            tok(TokenKind::Else, "sino"),
            tok(TokenKind::Identifier, "cc"),
            tok(TokenKind::ParenOpen, "("),
            tok(TokenKind::ParenClose, ")"),
        ]
    );
}

#[test]
fn test_operators_without_spaces() {
    let tokens = lex("222<<>>444").unwrap();

    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Number, "222"),
            tok(TokenKind::Operator, "<"),
            tok(TokenKind::Operator, "<"),
            tok(TokenKind::Operator, ">"),
            tok(TokenKind::Operator, ">"),
            tok(TokenKind::Number, "444"),
        ]
    );
}

#[test]
fn test_decimal_comparison() {
    let tokens = lex("42.43 < 45").unwrap();

    assert_eq!(
        tokens,
        vec![
            tok(TokenKind::Number, "42.43"),
            tok(TokenKind::Operator, "<"),
            tok(TokenKind::Number, "45"),
        ]
    );
}

#[test]
fn test_unrecognised_lexemes() {
    for source in [".00", "123.", "hol@"] {
        let error = lex(source).unwrap_err();
        assert_eq!(error.get_error_name(), "UnrecognisedLexeme", "{}", source);
    }
}

#[test]
fn test_failure_discards_earlier_tokens() {
    let error = lex("mostrar 'ok' ; x := 3.").unwrap_err();

    assert_eq!(error.get_lexeme(), "3.");
    assert_eq!(error.get_position().0, 20);
}

#[test]
fn test_full_program() {
    let source = "\
x := 0;
mientras x <= 10 hacer [
    si x mod 2 == 0 entonces mostrar(x, 'par') sino mostrar(x, 'impar');
    x := x + 1
]
";
    let tokens = lex(source).unwrap();

    assert_eq!(tokens.len(), 37);
    assert_eq!(tokens[0], tok(TokenKind::Identifier, "x"));
    assert_eq!(tokens[6], tok(TokenKind::Operator, "<="));
    assert_eq!(tokens[12], tok(TokenKind::Operator, "mod"));
    assert_eq!(tokens[21], tok(TokenKind::Literal, "'par'"));
    assert_eq!(tokens[36], tok(TokenKind::BracketClose, "]"));
}

#[test]
fn test_format_error() {
    let source = "x := 1\nmostrar a @ b\n";
    let error = lex(source).unwrap_err();
    let rendered = format_error(&error, source).unwrap();

    assert_eq!(
        rendered,
        "Error: UnrecognisedLexeme\n\
         -> test.txt\n  |\n\
         2 | mostrar a @ b\n  \
         | ----------^"
    );
}

#[test]
fn test_format_error_with_tip() {
    let source = "  'abc";
    let error = lex(source).unwrap_err();
    let rendered = format_error(&error, source).unwrap();

    assert!(rendered.starts_with("Error: UnrecognisedLexeme (Invalid literal: `'abc`"));
    assert!(rendered.ends_with("1 | 'abc\n  | ^"));
}

#[test]
fn test_concurrent_tokenization() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let source = format!("mientras x{} < {} hacer mostrar('v{}')", i, i, i);
                tokenize(source, None)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let tokens = handle.join().unwrap().unwrap();
        assert_eq!(tokens.len(), 9);
        assert_eq!(tokens[1], tok(TokenKind::Identifier, &format!("x{}", i)));
        assert_eq!(tokens[7], tok(TokenKind::Literal, &format!("'v{}'", i)));
    }
}
