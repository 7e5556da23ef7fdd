use serde::Serialize;

/// Position in source text (row and column, 1-indexed at the origin).
///
/// A newline advances the row and resets the column to 0; every other
/// character advances the column by 1. The first lexeme of the first row
/// therefore starts at column 1, while rows reached through a newline start
/// at column 0 until the first character is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

/// Span covering a range in source text.
///
/// Only string literals can span rows (a newline between the quotes is
/// consumed verbatim); every other token has `start.row == end.row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// Reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Keyword {
    Let,
    For,
    If,
    Else,
    While,
    Return,
    Func,
    Struct,
}

impl Keyword {
    /// Matches an identifier-shaped lexeme against the reserved words.
    pub fn from_text(text: &str) -> Option<Keyword> {
        match text {
            "let" => Some(Keyword::Let),
            "for" => Some(Keyword::For),
            "if" => Some(Keyword::If),
            "else" => Some(Keyword::Else),
            "while" => Some(Keyword::While),
            "return" => Some(Keyword::Return),
            "func" => Some(Keyword::Func),
            "struct" => Some(Keyword::Struct),
            _ => None,
        }
    }
}

/// The closed set of operator and punctuation spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    // Arithmetic
    Plus,         // +
    Minus,        // -
    Star,         // *
    Slash,        // /
    Power,        // **
    Percent,      // %

    // Assignment
    Assign,       // =

    // Comparison
    EqualEqual,   // ==
    NotEqual,     // !=
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=

    // Logical
    AndAnd,       // &&
    OrOr,         // ||
    Bang,         // !

    // Grouping / punctuation
    LeftParen,    // (
    RightParen,   // )
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Comma,        // ,
    Colon,        // :
    Semicolon,    // ;
    ColonColon,   // ::
    Arrow,        // ->
}

impl Operator {
    pub const ALL: [Operator; 27] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Star,
        Operator::Slash,
        Operator::Power,
        Operator::Percent,
        Operator::Assign,
        Operator::EqualEqual,
        Operator::NotEqual,
        Operator::Less,
        Operator::LessEqual,
        Operator::Greater,
        Operator::GreaterEqual,
        Operator::AndAnd,
        Operator::OrOr,
        Operator::Bang,
        Operator::LeftParen,
        Operator::RightParen,
        Operator::LeftBrace,
        Operator::RightBrace,
        Operator::LeftBracket,
        Operator::RightBracket,
        Operator::Comma,
        Operator::Colon,
        Operator::Semicolon,
        Operator::ColonColon,
        Operator::Arrow,
    ];

    /// The exact source spelling of the operator.
    pub fn spelling(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
            Operator::Power => "**",
            Operator::Percent => "%",
            Operator::Assign => "=",
            Operator::EqualEqual => "==",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::AndAnd => "&&",
            Operator::OrOr => "||",
            Operator::Bang => "!",
            Operator::LeftParen => "(",
            Operator::RightParen => ")",
            Operator::LeftBrace => "{",
            Operator::RightBrace => "}",
            Operator::LeftBracket => "[",
            Operator::RightBracket => "]",
            Operator::Comma => ",",
            Operator::Colon => ":",
            Operator::Semicolon => ";",
            Operator::ColonColon => "::",
            Operator::Arrow => "->",
        }
    }

    /// Looks up an exact spelling.
    pub fn from_spelling(text: &str) -> Option<Operator> {
        Operator::ALL.iter().copied().find(|op| op.spelling() == text)
    }

    /// True iff some operator spelling begins with the given character.
    pub fn starts_spelling(ch: char) -> bool {
        Operator::ALL.iter().any(|op| op.spelling().starts_with(ch))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenKind {
    Number(f64),
    String(String),
    Identifier(String),
    Keyword(Keyword),
    Operator(Operator),

    // End of input; positions equal, immediately after the last character.
    Eof,
}

/// Token with position information.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
