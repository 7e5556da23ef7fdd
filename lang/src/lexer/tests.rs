use expect_test::expect;

use super::*;
use crate::iter::Cursor;

fn span(start: (u32, u32), end: (u32, u32)) -> Span {
    Span::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

fn number(value: f64, start: (u32, u32), end: (u32, u32)) -> Token {
    Token::new(TokenKind::Number(value), span(start, end))
}

fn string(value: &str, start: (u32, u32), end: (u32, u32)) -> Token {
    Token::new(TokenKind::String(value.to_string()), span(start, end))
}

fn identifier(name: &str, start: (u32, u32), end: (u32, u32)) -> Token {
    Token::new(TokenKind::Identifier(name.to_string()), span(start, end))
}

fn keyword(kind: Keyword, start: (u32, u32), end: (u32, u32)) -> Token {
    Token::new(TokenKind::Keyword(kind), span(start, end))
}

fn operator(kind: Operator, start: (u32, u32), end: (u32, u32)) -> Token {
    Token::new(TokenKind::Operator(kind), span(start, end))
}

fn eof(at: (u32, u32)) -> Token {
    Token::new(TokenKind::Eof, span(at, at))
}

#[test]
fn lex_single_number() {
    let tokens = lex("1");
    let tokens_str = format!("{:#?}", tokens);
    expect![[r#"
        Ok(
            [
                Token {
                    kind: Number(
                        1.0,
                    ),
                    span: Span {
                        start: Position {
                            row: 1,
                            column: 1,
                        },
                        end: Position {
                            row: 1,
                            column: 1,
                        },
                    },
                },
                Token {
                    kind: Eof,
                    span: Span {
                        start: Position {
                            row: 1,
                            column: 2,
                        },
                        end: Position {
                            row: 1,
                            column: 2,
                        },
                    },
                },
            ],
        )"#]]
    .assert_eq(&tokens_str);
}

#[test]
fn lex_multiple_numbers() {
    assert_eq!(
        lex("123 45.6"),
        Ok(vec![
            number(123.0, (1, 1), (1, 3)),
            number(45.6, (1, 5), (1, 8)),
            eof((1, 9)),
        ])
    );
}

#[test]
fn lex_invalid_number() {
    assert_eq!(
        lex("1.2.3"),
        Err(LexError::InvalidNumber {
            text: "1.2.3".to_string(),
            span: span((1, 1), (1, 5)),
        })
    );
}

#[test]
fn lex_string_literal() {
    assert_eq!(
        lex(r#""hi""#),
        Ok(vec![string("hi", (1, 1), (1, 4)), eof((1, 5))])
    );
}

#[test]
fn lex_adjacent_string_literals() {
    assert_eq!(
        lex(r#""hi""by""#),
        Ok(vec![
            string("hi", (1, 1), (1, 4)),
            string("by", (1, 5), (1, 8)),
            eof((1, 9)),
        ])
    );
}

#[test]
fn lex_string_spanning_rows() {
    // A newline between the quotes is taken verbatim, so the span crosses
    // onto the next row.
    assert_eq!(
        lex("\"a\nb\""),
        Ok(vec![string("a\nb", (1, 1), (2, 1)), eof((2, 2))])
    );
}

#[test]
fn lex_unterminated_string() {
    assert_eq!(
        lex(r#""hello"#),
        Err(LexError::UnterminatedString {
            position: Position::new(1, 1),
        })
    );
}

#[test]
fn lex_keywords_and_identifiers() {
    assert_eq!(
        lex("for x if y"),
        Ok(vec![
            keyword(Keyword::For, (1, 1), (1, 3)),
            identifier("x", (1, 5), (1, 5)),
            keyword(Keyword::If, (1, 7), (1, 8)),
            identifier("y", (1, 10), (1, 10)),
            eof((1, 11)),
        ])
    );
}

#[test]
fn lex_let_keyword() {
    assert_eq!(
        lex("let x"),
        Ok(vec![
            keyword(Keyword::Let, (1, 1), (1, 3)),
            identifier("x", (1, 5), (1, 5)),
            eof((1, 6)),
        ])
    );
}

#[test]
fn lex_operator_disambiguation() {
    assert_eq!(
        lex("a!=b == c"),
        Ok(vec![
            identifier("a", (1, 1), (1, 1)),
            operator(Operator::NotEqual, (1, 2), (1, 3)),
            identifier("b", (1, 4), (1, 4)),
            operator(Operator::EqualEqual, (1, 6), (1, 7)),
            identifier("c", (1, 9), (1, 9)),
            eof((1, 10)),
        ])
    );
}

#[test]
fn lex_two_character_operators() {
    assert_eq!(
        lex("** :: ->"),
        Ok(vec![
            operator(Operator::Power, (1, 1), (1, 2)),
            operator(Operator::ColonColon, (1, 4), (1, 5)),
            operator(Operator::Arrow, (1, 7), (1, 8)),
            eof((1, 9)),
        ])
    );
}

#[test]
fn lex_ampersand_requires_pair() {
    // '&' starts the '&&' spelling but is not an operator on its own.
    assert_eq!(
        lex("&"),
        Err(LexError::InvalidOperator {
            text: "&".to_string(),
            span: span((1, 1), (1, 1)),
        })
    );

    assert_eq!(
        lex("&&x"),
        Ok(vec![
            operator(Operator::AndAnd, (1, 1), (1, 2)),
            identifier("x", (1, 3), (1, 3)),
            eof((1, 4)),
        ])
    );
}

#[test]
fn lex_unexpected_character() {
    assert_eq!(
        lex("@"),
        Err(LexError::UnexpectedCharacter {
            ch: '@',
            position: Position::new(1, 1),
        })
    );
}

#[test]
fn lex_newline_position_rule() {
    // A newline bumps the row and resets the column to 0; the column only
    // becomes 1 again once a character on the new row is consumed.
    assert_eq!(
        lex("1\n23"),
        Ok(vec![
            number(1.0, (1, 1), (1, 1)),
            number(23.0, (2, 0), (2, 1)),
            eof((2, 2)),
        ])
    );
}

#[test]
fn lex_empty_input() {
    assert_eq!(lex(""), Ok(vec![eof((1, 1))]));
}

#[test]
fn lex_trailing_whitespace() {
    assert_eq!(lex("1 "), Ok(vec![number(1.0, (1, 1), (1, 1)), eof((1, 3))]));
}

#[test]
fn eof_token_is_delivered_exactly_once() {
    let mut tokenizer = tokenize("1");

    assert!(!tokenizer.is_over());
    assert_eq!(tokenizer.next(), Ok(number(1.0, (1, 1), (1, 1))));
    assert!(!tokenizer.is_over());
    assert_eq!(tokenizer.next(), Ok(eof((1, 2))));

    // Terminal: the cursor now faults like any exhausted iterator.
    assert!(tokenizer.is_over());
    assert_eq!(tokenizer.next(), Err(LexError::Exhausted));
    assert_eq!(tokenizer.next(), Err(LexError::Exhausted));
}

#[test]
fn token_spans_are_ordered_and_disjoint() {
    let tokens = lex("123 45.6 + foo != \"bar\"").unwrap();

    let mut previous_end = 0;
    for token in &tokens {
        assert_eq!(token.span.start.row, token.span.end.row);
        assert!(token.span.start.column <= token.span.end.column);
        assert!(token.span.start.column > previous_end);
        previous_end = token.span.end.column;
    }
}
