//! Unified error handling for the VDSH compiler.
//!
//! Each stage reports a typed error enum of its own; this module folds them
//! into one renderable error with an accurate source position where one is
//! available. The core never prints — callers render [`VdshError`].


use crate::lexer::{LexError, Position};
use crate::parser::ParseError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum VdshError {
    /// Tokenization failed.
    Lex {
        message: String,
        position: Option<Position>,
    },

    /// Parsing failed.
    Parse {
        message: String,
        position: Option<Position>,
    },
}

impl VdshError {
    pub fn lex(message: impl Into<String>, position: Position) -> Self {
        VdshError::Lex {
            message: message.into(),
            position: Some(position),
        }
    }

    pub fn lex_no_position(message: impl Into<String>) -> Self {
        VdshError::Lex {
            message: message.into(),
            position: None,
        }
    }

    pub fn parse(message: impl Into<String>, position: Position) -> Self {
        VdshError::Parse {
            message: message.into(),
            position: Some(position),
        }
    }

    pub fn parse_no_position(message: impl Into<String>) -> Self {
        VdshError::Parse {
            message: message.into(),
            position: None,
        }
    }

    /// Short error kind description, e.g. "LexError".
    pub fn kind(&self) -> &'static str {
        match self {
            VdshError::Lex { .. } => "LexError",
            VdshError::Parse { .. } => "ParseError",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            VdshError::Lex { message, .. } => message,
            VdshError::Parse { message, .. } => message,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            VdshError::Lex { position, .. } => *position,
            VdshError::Parse { position, .. } => *position,
        }
    }
}

impl fmt::Display for VdshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position() {
            Some(position) => write!(
                f,
                "{} at {}:{}: {}",
                self.kind(),
                position.row,
                position.column,
                self.message()
            ),
            None => write!(f, "{}: {}", self.kind(), self.message()),
        }
    }
}

impl std::error::Error for VdshError {}

impl From<LexError> for VdshError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::UnexpectedCharacter { ch, position } => {
                VdshError::lex(format!("Unexpected character '{}'", ch), position)
            }
            LexError::InvalidNumber { text, span } => {
                VdshError::lex(format!("Invalid number: '{}'", text), span.start)
            }
            LexError::UnterminatedString { position } => {
                VdshError::lex("Unterminated string literal", position)
            }
            LexError::InvalidOperator { text, span } => {
                VdshError::lex(format!("Invalid operator: '{}'", text), span.start)
            }
            LexError::Exhausted => {
                VdshError::lex_no_position("Attempted to read past the end of the token stream")
            }
        }
    }
}

impl From<ParseError> for VdshError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnexpectedToken { token } => VdshError::parse(
                format!("Unexpected token: {:?}", token.kind),
                token.span.start,
            ),
            ParseError::UnclosedParen {
                opening, actual, ..
            } => VdshError::parse(
                format!(
                    "Expected ')' to close group opened at {}:{}, got {:?}",
                    opening.span.start.row, opening.span.start.column, actual.kind
                ),
                actual.span.start,
            ),
            ParseError::MissingSemicolon { actual } => VdshError::parse(
                format!("Expected ';' after let statement, got {:?}", actual.kind),
                actual.span.start,
            ),
            ParseError::MissingIdentifierInAssignment { actual } => VdshError::parse(
                format!("Expected identifier in assignment, got {:?}", actual.kind),
                actual.span.start,
            ),
            ParseError::MissingAssignInAssignment { name, actual } => VdshError::parse(
                format!("Expected '=' after '{}', got {:?}", name, actual.kind),
                actual.span.start,
            ),
            ParseError::MissingIdentifierInFuncDeclaration { actual } => VdshError::parse(
                format!("Expected function name, got {:?}", actual.kind),
                actual.span.start,
            ),
            ParseError::MissingLeftParenInFuncDeclaration { actual } => VdshError::parse(
                format!("Expected '(' after function name, got {:?}", actual.kind),
                actual.span.start,
            ),
            ParseError::MissingRightParenInFuncDeclaration { actual } => VdshError::parse(
                format!("Expected ')' after argument list, got {:?}", actual.kind),
                actual.span.start,
            ),
            ParseError::InvalidArgumentDeclaration { expected, actual } => VdshError::parse(
                format!(
                    "Expected '{}' in argument declaration, got {:?}",
                    expected.spelling(),
                    actual.kind
                ),
                actual.span.start,
            ),
            ParseError::MissingTypeIdentifier { argument, actual } => VdshError::parse(
                format!(
                    "Expected type for argument '{}', got {:?}",
                    argument, actual.kind
                ),
                actual.span.start,
            ),
            ParseError::BlockMissingInitialBrace { actual } => VdshError::parse(
                format!("Expected '{{' to open block, got {:?}", actual.kind),
                actual.span.start,
            ),
            ParseError::Lex(err) => VdshError::from(err),
        }
    }
}
