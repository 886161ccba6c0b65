//! Integration tests for the selector scanner.

use thicket_select::{LexError, Token, tokenize};

#[test]
fn test_single_identifier() {
    assert_eq!(
        tokenize("a").unwrap(),
        vec![Token::identifier("a"), Token::EndOfInput]
    );
}

#[test]
fn test_class_then_descendant() {
    assert_eq!(
        tokenize("a.class img").unwrap(),
        vec![
            Token::identifier("a"),
            Token::Dot,
            Token::identifier("class"),
            Token::Blank,
            Token::identifier("img"),
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(
        tokenize("a#id  >  img.cls1.cls2").unwrap(),
        vec![
            Token::identifier("a"),
            Token::Sharp,
            Token::identifier("id"),
            Token::Blank,
            Token::Greater,
            Token::Blank,
            Token::identifier("img"),
            Token::Dot,
            Token::identifier("cls1"),
            Token::Dot,
            Token::identifier("cls2"),
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_decimal_value_is_one_literal() {
    assert_eq!(
        tokenize("[attr] ~  .cls[attr=123.45]").unwrap(),
        vec![
            Token::LeftBracket,
            Token::identifier("attr"),
            Token::RightBracket,
            Token::Blank,
            Token::Wave,
            Token::Blank,
            Token::Dot,
            Token::identifier("cls"),
            Token::LeftBracket,
            Token::identifier("attr"),
            Token::Assign,
            Token::literal("123.45"),
            Token::RightBracket,
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_quoted_and_url_values() {
    assert_eq!(
        tokenize("a[attr='123'] + img[src=http://www.example.com], img[href=\"abc\"]").unwrap(),
        vec![
            Token::identifier("a"),
            Token::LeftBracket,
            Token::identifier("attr"),
            Token::Assign,
            Token::string("'123'"),
            Token::RightBracket,
            Token::Blank,
            Token::Plus,
            Token::Blank,
            Token::identifier("img"),
            Token::LeftBracket,
            Token::identifier("src"),
            Token::Assign,
            Token::literal("http://www.example.com"),
            Token::RightBracket,
            Token::Comma,
            Token::Blank,
            Token::identifier("img"),
            Token::LeftBracket,
            Token::identifier("href"),
            Token::Assign,
            Token::string("\"abc\""),
            Token::RightBracket,
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_operator_prefixes_before_assign() {
    assert_eq!(
        tokenize("[a^=x][b$=y][c*=z]").unwrap(),
        vec![
            Token::LeftBracket,
            Token::identifier("a"),
            Token::Up,
            Token::Assign,
            Token::literal("x"),
            Token::RightBracket,
            Token::LeftBracket,
            Token::identifier("b"),
            Token::Dollar,
            Token::Assign,
            Token::literal("y"),
            Token::RightBracket,
            Token::LeftBracket,
            Token::identifier("c"),
            Token::Star,
            Token::Assign,
            Token::literal("z"),
            Token::RightBracket,
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_operator_characters_inside_value_are_literal() {
    // `>`, `#`, `,` and `.` would be punctuation outside the brackets.
    assert_eq!(
        tokenize("[data=a>b#c,d.e]").unwrap(),
        vec![
            Token::LeftBracket,
            Token::identifier("data"),
            Token::Assign,
            Token::literal("a>b#c,d.e"),
            Token::RightBracket,
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_identifier_charset() {
    assert_eq!(
        tokenize("_nav-item2 über").unwrap(),
        vec![
            Token::identifier("_nav-item2"),
            Token::Blank,
            Token::identifier("über"),
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_star_alone_is_universal() {
    assert_eq!(
        tokenize("* > *").unwrap(),
        vec![
            Token::Star,
            Token::Blank,
            Token::Greater,
            Token::Blank,
            Token::Star,
            Token::EndOfInput,
        ]
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize("").unwrap(), vec![Token::EndOfInput]);
}

#[test]
fn test_unexpected_character() {
    assert_eq!(
        tokenize("div:hover"),
        Err(LexError::UnexpectedCharacter {
            ch: ':',
            position: 3
        })
    );
    assert_eq!(
        tokenize("#1st"),
        Err(LexError::UnexpectedCharacter {
            ch: '1',
            position: 1
        })
    );
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        tokenize("[attr='abc"),
        Err(LexError::UnterminatedString {
            literal: "'abc".to_string(),
            position: 6
        })
    );
}

#[test]
fn test_token_display() {
    assert_eq!(Token::identifier("div").to_string(), "<Identifier, div>");
    assert_eq!(Token::Comma.to_string(), "<Comma>");
    assert_eq!(Token::string("'x'").to_string(), "<StringLit, 'x'>");
}
