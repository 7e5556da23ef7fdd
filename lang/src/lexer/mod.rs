pub mod token;

pub use token::{Keyword, Operator, Position, Span, Token, TokenKind};

#[cfg(test)]
mod tests;

use crate::iter::{Cursor, Exhausted, Peekable, SequenceCursor};

const STRING_TERMINATOR: char = '"';

#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    UnexpectedCharacter { ch: char, position: Position },
    InvalidNumber { text: String, span: Span },
    UnterminatedString { position: Position },
    InvalidOperator { text: String, span: Span },
    /// `next()` was called again after the `Eof` token had been delivered.
    Exhausted,
}

impl From<Exhausted> for LexError {
    fn from(_: Exhausted) -> Self {
        LexError::Exhausted
    }
}

pub type LexResult = Result<Vec<Token>, LexError>;

/// Lazy tokenizer over a source string.
///
/// Drive it via [`Cursor::is_over`] / [`Cursor::next`]; see [`lex`] for the
/// eager equivalent.
pub fn tokenize(input: &str) -> Tokenizer {
    Tokenizer::new(input)
}

/// Tokenizes the whole input eagerly, `Eof` token included.
pub fn lex(input: &str) -> LexResult {
    let mut tokenizer = tokenize(input);
    let mut tokens = Vec::new();

    while !tokenizer.is_over() {
        tokens.push(tokenizer.next()?);
    }

    Ok(tokens)
}

/// State machine turning characters into a lazy token stream.
///
/// The `Eof` token is the terminal value and is delivered exactly once: after
/// it, `is_over()` is permanently true and further `next()` calls fail with
/// [`LexError::Exhausted`], like any other exhausted cursor.
pub struct Tokenizer {
    chars: Peekable<SequenceCursor<char>>,
    position: Position,
    last_position: Position,
    reached_eof: bool,
}

impl Tokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: Peekable::new(SequenceCursor::from_source(input)),
            position: Position::new(1, 1),
            last_position: Position::new(1, 1),
            reached_eof: false,
        }
    }

    fn advance_position(&mut self, ch: char) {
        if ch == '\n' {
            self.position.row += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
    }

    /// Consumes one character, recording the position it occupied.
    fn consume(&mut self) -> Result<char, LexError> {
        let ch = self.chars.next()?;
        self.last_position = self.position;
        self.advance_position(ch);
        Ok(ch)
    }

    /// Consumes the maximal run of characters matching the predicate.
    fn read_while(&mut self, predicate: impl Fn(char) -> bool) -> Result<String, LexError> {
        let mut text = String::new();

        while !self.chars.is_over() {
            let ch = *self.chars.peek()?;
            if !predicate(ch) {
                break;
            }
            text.push(self.consume()?);
        }

        Ok(text)
    }

    fn skip_whitespace(&mut self) -> Result<(), LexError> {
        self.read_while(char::is_whitespace)?;
        Ok(())
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let text = self.read_while(|ch| ch.is_ascii_digit() || ch == '.')?;
        let end = self.last_position;

        match text.parse::<f64>() {
            Ok(value) => Ok(Token::new(TokenKind::Number(value), Span::new(start, end))),
            Err(_) => Err(LexError::InvalidNumber {
                text,
                span: Span::new(start, end),
            }),
        }
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        self.consume()?; // opening quote

        let mut value = String::new();

        while !self.chars.is_over() {
            let ch = self.consume()?;

            if ch == STRING_TERMINATOR {
                let span = Span::new(start, self.last_position);
                return Ok(Token::new(TokenKind::String(value), span));
            }

            // No escape processing; characters are taken verbatim.
            value.push(ch);
        }

        Err(LexError::UnterminatedString { position: start })
    }

    fn read_identifier_or_keyword(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let text = self.read_while(char::is_alphabetic)?;
        let end = self.last_position;

        let kind = match Keyword::from_text(&text) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(text),
        };

        Ok(Token::new(kind, Span::new(start, end)))
    }

    /// Longest-match operator scan: keep extending the lexeme while it is
    /// still a prefix of some spelling, then require an exact match.
    fn read_operator(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let mut text = String::from(self.consume()?);

        while !self.chars.is_over() {
            let next = *self.chars.peek()?;

            let mut candidate = text.clone();
            candidate.push(next);
            let extends = Operator::ALL
                .iter()
                .any(|op| op.spelling().starts_with(candidate.as_str()));
            if !extends {
                break;
            }

            text.push(self.consume()?);
        }

        let end = self.last_position;
        match Operator::from_spelling(&text) {
            Some(op) => Ok(Token::new(TokenKind::Operator(op), Span::new(start, end))),
            None => Err(LexError::InvalidOperator {
                text,
                span: Span::new(start, end),
            }),
        }
    }
}

impl Cursor for Tokenizer {
    type Item = Token;
    type Error = LexError;

    fn is_over(&self) -> bool {
        self.reached_eof
    }

    fn next(&mut self) -> Result<Token, LexError> {
        if self.reached_eof {
            return Err(LexError::Exhausted);
        }

        self.skip_whitespace()?;

        if self.chars.is_over() {
            self.reached_eof = true;
            let position = self.position;
            return Ok(Token::new(TokenKind::Eof, Span::new(position, position)));
        }

        let ch = *self.chars.peek()?;

        if ch.is_ascii_digit() || ch == '.' {
            return self.read_number();
        }

        if ch == STRING_TERMINATOR {
            return self.read_string();
        }

        if ch.is_alphabetic() {
            return self.read_identifier_or_keyword();
        }

        if Operator::starts_spelling(ch) {
            return self.read_operator();
        }

        Err(LexError::UnexpectedCharacter {
            ch,
            position: self.position,
        })
    }
}
