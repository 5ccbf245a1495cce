//! Tests for the lexer: ignored tokens, punctuators, names, numbers,
//! strings, and comments.

use crate::lex;
use crate::token::TokenKind;
use std::borrow::Cow;

/// Lexes the first token, panicking on error.
fn first(source: &str) -> crate::token::Token<'_> {
    lex(source, 0).unwrap_or_else(|err| panic!("lex failed: {err}"))
}

/// Lexes the first token, panicking on success.
fn first_err(source: &str) -> crate::SyntaxError {
    match lex(source, 0) {
        Ok(token) => panic!("expected a lex error, got {token:?}"),
        Err(err) => err,
    }
}

#[test]
fn empty_input_is_eof() {
    let token = first("");
    assert_eq!(token.kind, TokenKind::Eof);
    assert_eq!((token.start, token.end), (0, 0));
}

#[test]
fn whitespace_only_input_is_eof_at_end() {
    let token = first("  \t \n ");
    assert_eq!(token.kind, TokenKind::Eof);
    assert_eq!((token.start, token.end), (6, 6));
}

/// BOM, commas, and line terminators are all insignificant separators.
#[test]
fn skips_bom_commas_and_newlines() {
    let token = first("\u{FEFF} ,, \r\n hero");
    assert_eq!(token.kind, TokenKind::Name("hero"));
}

#[test]
fn lexes_punctuators() {
    let cases: &[(&str, TokenKind)] = &[
        ("!", TokenKind::Bang),
        ("$", TokenKind::Dollar),
        ("&", TokenKind::Ampersand),
        ("(", TokenKind::ParenOpen),
        (")", TokenKind::ParenClose),
        (":", TokenKind::Colon),
        ("=", TokenKind::Equals),
        ("@", TokenKind::At),
        ("[", TokenKind::SquareBracketOpen),
        ("]", TokenKind::SquareBracketClose),
        ("{", TokenKind::CurlyBraceOpen),
        ("}", TokenKind::CurlyBraceClose),
        ("|", TokenKind::Pipe),
        ("...", TokenKind::Spread),
    ];
    for (source, expected) in cases {
        assert_eq!(&first(source).kind, expected, "source: {source}");
    }
}

#[test]
fn two_dots_are_an_error() {
    let err = first_err("..");
    assert!(err.message.contains("`.`"), "message: {}", err.message);
    assert_eq!(err.offset, 0);
}

#[test]
fn lexes_names_with_underscores_and_digits() {
    let token = first("_my_Name2 rest");
    assert_eq!(token.kind, TokenKind::Name("_my_Name2"));
    assert_eq!((token.start, token.end), (0, 9));
}

/// Boolean/null keywords are plain names at the lexical level.
#[test]
fn keywords_lex_as_names() {
    assert_eq!(first("true").kind, TokenKind::Name("true"));
    assert_eq!(first("null").kind, TokenKind::Name("null"));
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn lexes_integers() {
    assert_eq!(first("0").kind, TokenKind::IntValue("0"));
    assert_eq!(first("42").kind, TokenKind::IntValue("42"));
    assert_eq!(first("-9").kind, TokenKind::IntValue("-9"));
}

#[test]
fn lexes_floats() {
    assert_eq!(first("1.5").kind, TokenKind::FloatValue("1.5"));
    assert_eq!(first("-0.25").kind, TokenKind::FloatValue("-0.25"));
    assert_eq!(first("2e10").kind, TokenKind::FloatValue("2e10"));
    assert_eq!(first("1.5e-3").kind, TokenKind::FloatValue("1.5e-3"));
    assert_eq!(first("6E+2").kind, TokenKind::FloatValue("6E+2"));
}

#[test]
fn rejects_leading_zeros() {
    let err = first_err("01");
    assert!(
        err.message.contains("leading zeros"),
        "message: {}",
        err.message,
    );
}

#[test]
fn rejects_bare_minus() {
    assert!(first_err("-").message.contains("expected a digit"));
}

#[test]
fn rejects_trailing_dot() {
    assert!(first_err("1.").message.contains("digit after `.`"));
}

#[test]
fn rejects_dot_before_exponent() {
    assert!(first_err("1.e3").message.contains("digit after `.`"));
}

#[test]
fn rejects_empty_exponent() {
    assert!(first_err("1e").message.contains("exponent"));
    assert!(first_err("1e+").message.contains("exponent"));
}

#[test]
fn rejects_name_characters_after_number() {
    assert!(first_err("123abc").message.contains("after number"));
    assert!(first_err("1.2.3").message.contains("after number"));
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn lexes_plain_string_without_allocation() {
    let token = first(r#""hello world""#);
    match token.kind {
        TokenKind::StringValue(Cow::Borrowed(value)) => {
            assert_eq!(value, "hello world");
        },
        other => panic!("expected a borrowed string, got {other:?}"),
    }
    assert_eq!((token.start, token.end), (0, 13));
}

#[test]
fn decodes_simple_escapes() {
    let token = first(r#""a\n\t\"\\\/\b\f\r""#);
    match token.kind {
        TokenKind::StringValue(value) => {
            assert_eq!(value, "a\n\t\"\\/\u{0008}\u{000C}\r");
        },
        other => panic!("expected a string, got {other:?}"),
    }
}

#[test]
fn decodes_unicode_escape() {
    let token = first(r#""\u0041\u00E9""#);
    match token.kind {
        TokenKind::StringValue(value) => assert_eq!(value, "A\u{00E9}"),
        other => panic!("expected a string, got {other:?}"),
    }
}

/// A leading surrogate followed by a trailing surrogate combines into a
/// single character.
#[test]
fn decodes_surrogate_pair() {
    let token = first(r#""\uD83D\uDE00""#);
    match token.kind {
        TokenKind::StringValue(value) => assert_eq!(value, "\u{1F600}"),
        other => panic!("expected a string, got {other:?}"),
    }
}

#[test]
fn rejects_lone_leading_surrogate() {
    let err = first_err(r#""\uD83D""#);
    assert!(err.message.contains("surrogate"), "message: {}", err.message);
}

#[test]
fn rejects_lone_trailing_surrogate() {
    let err = first_err(r#""\uDE00""#);
    assert!(err.message.contains("surrogate"), "message: {}", err.message);
}

#[test]
fn rejects_leading_surrogate_followed_by_non_surrogate() {
    let err = first_err(r#""\uD83DA""#);
    assert!(err.message.contains("surrogate"), "message: {}", err.message);
}

#[test]
fn rejects_invalid_escape() {
    let err = first_err(r#""\x""#);
    assert!(err.message.contains("\\x"), "message: {}", err.message);
}

#[test]
fn rejects_short_hex_escape() {
    assert!(first_err(r#""\u12""#).message.contains("hex"));
}

#[test]
fn rejects_unterminated_string() {
    let err = first_err(r#""abc"#);
    assert_eq!(err.message, "unterminated string");
    assert_eq!(err.offset, 0);
}

#[test]
fn rejects_newline_in_string() {
    assert_eq!(first_err("\"ab\ncd\"").message, "unterminated string");
}

#[test]
fn rejects_control_character_in_string() {
    let err = first_err("\"a\u{0007}b\"");
    assert!(
        err.message.contains("within string"),
        "message: {}",
        err.message,
    );
}

#[test]
fn tab_is_allowed_in_string() {
    let token = first("\"a\tb\"");
    match token.kind {
        TokenKind::StringValue(value) => assert_eq!(value, "a\tb"),
        other => panic!("expected a string, got {other:?}"),
    }
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn lexes_comment_to_end_of_line() {
    let token = first("# a comment\nrest");
    assert_eq!(token.kind, TokenKind::Comment(" a comment"));
    assert_eq!((token.start, token.end), (0, 11));
}

#[test]
fn lexes_comment_at_end_of_input() {
    let token = first("#tail");
    assert_eq!(token.kind, TokenKind::Comment("tail"));
}

/// `lex` is a pure function of (source, offset): re-lexing the same
/// offset yields the same token.
#[test]
fn lexing_is_idempotent() {
    let source = "query { name }";
    let a = lex(source, 5).unwrap();
    let b = lex(source, 5).unwrap();
    assert_eq!(a, b);
}

#[test]
fn lexes_token_stream_by_chaining_offsets() {
    let source = "type Droid { fn: Int }";
    let mut offset = 0;
    let mut kinds = Vec::new();
    loop {
        let token = lex(source, offset).unwrap();
        offset = token.end;
        let done = token.is_eof();
        kinds.push(token.kind);
        if done {
            break;
        }
    }
    assert_eq!(
        kinds,
        vec![
            TokenKind::Name("type"),
            TokenKind::Name("Droid"),
            TokenKind::CurlyBraceOpen,
            TokenKind::Name("fn"),
            TokenKind::Colon,
            TokenKind::Name("Int"),
            TokenKind::CurlyBraceClose,
            TokenKind::Eof,
        ],
    );
}

#[test]
fn rejects_unexpected_character() {
    let err = first_err("%");
    assert!(err.message.contains('%'), "message: {}", err.message);
    assert_eq!(err.offset, 0);
}
