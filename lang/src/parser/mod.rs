pub mod ast;

use crate::iter::{Cursor, Exhausted, Peekable, SequenceCursor};
use crate::lexer::{Keyword, LexError, Operator, Token, TokenKind};
use ast::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// An atom was expected but the token matches none of number,
    /// identifier or `(`.
    UnexpectedToken { token: Token },
    /// A parenthesized group never saw its closing `)`.
    UnclosedParen {
        opening: Token,
        inner: Node,
        expected: Operator,
        actual: Token,
    },

    // Statement-level errors
    MissingSemicolon { actual: Token },
    MissingIdentifierInAssignment { actual: Token },
    MissingAssignInAssignment { name: String, actual: Token },
    MissingIdentifierInFuncDeclaration { actual: Token },
    MissingLeftParenInFuncDeclaration { actual: Token },
    MissingRightParenInFuncDeclaration { actual: Token },
    InvalidArgumentDeclaration { expected: Operator, actual: Token },
    MissingTypeIdentifier { argument: String, actual: Token },
    BlockMissingInitialBrace { actual: Token },

    /// The token source itself failed while the parser was pulling from it.
    Lex(LexError),
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl From<Exhausted> for ParseError {
    fn from(_: Exhausted) -> Self {
        ParseError::Lex(LexError::Exhausted)
    }
}

pub type ParseResult = Result<Node, ParseError>;

/// A grammar production; used to wire the precedence-climbing combinators.
type Production<I> = fn(&mut Parser<I>) -> ParseResult;

/// Recursive-descent parser over any token cursor.
///
/// One token of look-ahead, no backtracking: every production either matches
/// by peeking or fails permanently.
pub struct Parser<I: Cursor<Item = Token>> {
    tokens: Peekable<I>,
}

impl<I> Parser<I>
where
    I: Cursor<Item = Token>,
    ParseError: From<I::Error>,
{
    pub fn new(tokens: I) -> Self {
        Self {
            tokens: Peekable::new(tokens),
        }
    }

    /// Parses one boolean expression as the whole program.
    pub fn parse(&mut self) -> ParseResult {
        self.parse_bool_expression()
    }

    /// Parses one statement: a `let` binding, a `func` declaration, or a
    /// bare boolean expression.
    pub fn parse_statement(&mut self) -> ParseResult {
        let token = self.peek()?.clone();

        match token.kind {
            TokenKind::Keyword(Keyword::Let) => {
                self.consume()?;
                let assignment = self.parse_assignment()?;
                self.expect_operator(Operator::Semicolon, |actual| ParseError::MissingSemicolon {
                    actual,
                })?;
                Ok(Node::Let(LetStatement { assignment }))
            }
            TokenKind::Keyword(Keyword::Func) => {
                self.consume()?;
                let declaration = self.parse_func_declaration()?;
                Ok(Node::Func(FuncStatement { declaration }))
            }
            _ => self.parse_bool_expression(),
        }
    }

    fn peek(&mut self) -> Result<&Token, ParseError> {
        Ok(self.tokens.peek()?)
    }

    fn consume(&mut self) -> Result<Token, ParseError> {
        Ok(self.tokens.next()?)
    }

    /// Consumes the next token if it is the expected operator, otherwise
    /// fails with the provided error.
    fn expect_operator(
        &mut self,
        expected: Operator,
        error: impl FnOnce(Token) -> ParseError,
    ) -> Result<Token, ParseError> {
        let token = self.peek()?.clone();
        if !matches!(token.kind, TokenKind::Operator(op) if op == expected) {
            return Err(error(token));
        }

        self.consume()
    }

    /// Returns the peeked operator if it belongs to the given set.
    fn peek_operator(&mut self, operators: &[Operator]) -> Result<Option<Operator>, ParseError> {
        let token = self.peek()?;
        if let TokenKind::Operator(op) = token.kind {
            if operators.contains(&op) {
                return Ok(Some(op));
            }
        }

        Ok(None)
    }

    /// Shared shape of every binary production: parse the left side, then
    /// fold in `<op> <right>` pairs while the peeked operator matches.
    ///
    /// Associativity is decided by the `right` production: a self-recursive
    /// right side makes the production right-recursive, while `repeated`
    /// with a tighter right side folds left-associatively.
    fn parse_binary_operation(
        &mut self,
        left: Production<I>,
        right: Production<I>,
        operators: &[Operator],
        repeated: bool,
    ) -> ParseResult {
        let mut node = left(self)?;

        while let Some(op) = self.peek_operator(operators)? {
            self.consume()?;
            let rhs = right(self)?;

            node = Node::Binary {
                op,
                left: Box::new(node),
                right: Box::new(rhs),
            };

            if !repeated {
                break;
            }
        }

        Ok(node)
    }

    /// Right-recursive unary production: zero or more prefix operators in
    /// front of the wrapped production.
    fn parse_unary_operation(
        &mut self,
        production: Production<I>,
        operators: &[Operator],
    ) -> ParseResult {
        if let Some(op) = self.peek_operator(operators)? {
            self.consume()?;
            let operand = self.parse_unary_operation(production, operators)?;

            return Ok(Node::Unary {
                op,
                operand: Box::new(operand),
            });
        }

        production(self)
    }

    fn parse_atom(&mut self) -> ParseResult {
        let token = self.consume()?;

        match token.kind {
            TokenKind::Number(value) => Ok(Node::Number(value)),
            TokenKind::Identifier(name) => Ok(Node::Identifier(name)),
            TokenKind::Operator(Operator::LeftParen) => {
                let inner = self.parse_bool_expression()?;

                let actual = self.peek()?.clone();
                if !matches!(actual.kind, TokenKind::Operator(Operator::RightParen)) {
                    return Err(ParseError::UnclosedParen {
                        opening: token,
                        inner,
                        expected: Operator::RightParen,
                        actual,
                    });
                }
                self.consume()?;

                Ok(inner)
            }
            _ => Err(ParseError::UnexpectedToken { token }),
        }
    }

    fn parse_power(&mut self) -> ParseResult {
        self.parse_binary_operation(
            Self::parse_atom,
            Self::parse_factor,
            &[Operator::Power],
            true,
        )
    }

    fn parse_factor(&mut self) -> ParseResult {
        self.parse_unary_operation(Self::parse_power, &[Operator::Plus, Operator::Minus])
    }

    fn parse_term(&mut self) -> ParseResult {
        self.parse_binary_operation(
            Self::parse_factor,
            Self::parse_factor,
            &[Operator::Star, Operator::Slash, Operator::Percent],
            true,
        )
    }

    // Right-recursive on purpose: `1 - 2 - 3` groups as `1 - (2 - 3)`.
    fn parse_expression(&mut self) -> ParseResult {
        self.parse_binary_operation(
            Self::parse_term,
            Self::parse_expression,
            &[Operator::Plus, Operator::Minus],
            true,
        )
    }

    // Non-chaining: `a < b < c` parses as `(a < b)` followed by stray input.
    fn parse_comparison(&mut self) -> ParseResult {
        self.parse_binary_operation(
            Self::parse_expression,
            Self::parse_expression,
            &[
                Operator::EqualEqual,
                Operator::NotEqual,
                Operator::Less,
                Operator::LessEqual,
                Operator::Greater,
                Operator::GreaterEqual,
            ],
            false,
        )
    }

    fn parse_bool_factor(&mut self) -> ParseResult {
        self.parse_unary_operation(Self::parse_comparison, &[Operator::Bang])
    }

    fn parse_bool_term(&mut self) -> ParseResult {
        self.parse_binary_operation(
            Self::parse_bool_factor,
            Self::parse_bool_term,
            &[Operator::AndAnd],
            true,
        )
    }

    fn parse_bool_expression(&mut self) -> ParseResult {
        self.parse_binary_operation(
            Self::parse_bool_term,
            Self::parse_bool_expression,
            &[Operator::OrOr],
            true,
        )
    }

    fn parse_assignment(&mut self) -> Result<Assignment, ParseError> {
        let token = self.peek()?.clone();
        let name = match token.kind {
            TokenKind::Identifier(name) => name,
            _ => return Err(ParseError::MissingIdentifierInAssignment { actual: token }),
        };
        self.consume()?;

        let token = self.peek()?.clone();
        if !matches!(token.kind, TokenKind::Operator(Operator::Assign)) {
            return Err(ParseError::MissingAssignInAssignment {
                name,
                actual: token,
            });
        }
        self.consume()?;

        let value = self.parse_statement()?;

        Ok(Assignment {
            name,
            value: Box::new(value),
        })
    }

    /// Parses one `name: type` argument, or `None` if the next token does
    /// not open one.
    fn parse_argument(&mut self) -> Result<Option<Argument>, ParseError> {
        let token = self.peek()?.clone();
        let name = match token.kind {
            TokenKind::Identifier(name) => name,
            _ => return Ok(None),
        };
        self.consume()?;

        self.expect_operator(Operator::Colon, |actual| {
            ParseError::InvalidArgumentDeclaration {
                expected: Operator::Colon,
                actual,
            }
        })?;

        let token = self.peek()?.clone();
        let type_name = match token.kind {
            TokenKind::Identifier(type_name) => type_name,
            _ => {
                return Err(ParseError::MissingTypeIdentifier {
                    argument: name,
                    actual: token,
                })
            }
        };
        self.consume()?;

        Ok(Some(Argument { name, type_name }))
    }

    fn parse_arguments(&mut self) -> Result<Arguments, ParseError> {
        let mut list = Vec::new();

        while let Some(argument) = self.parse_argument()? {
            list.push(argument);

            if self.peek_operator(&[Operator::Comma])?.is_none() {
                break;
            }
            self.consume()?;
        }

        Ok(Arguments { list })
    }

    fn parse_block(&mut self) -> Result<Block, ParseError> {
        self.expect_operator(Operator::LeftBrace, |actual| {
            ParseError::BlockMissingInitialBrace { actual }
        })?;

        let mut statements = Vec::new();

        while self.peek_operator(&[Operator::RightBrace])?.is_none() {
            statements.push(self.parse_statement()?);
        }
        self.consume()?; // closing brace

        Ok(Block { statements })
    }

    fn parse_func_declaration(&mut self) -> Result<FuncDeclaration, ParseError> {
        let token = self.peek()?.clone();
        let name = match token.kind {
            TokenKind::Identifier(name) => name,
            _ => return Err(ParseError::MissingIdentifierInFuncDeclaration { actual: token }),
        };
        self.consume()?;

        self.expect_operator(Operator::LeftParen, |actual| {
            ParseError::MissingLeftParenInFuncDeclaration { actual }
        })?;
        let arguments = self.parse_arguments()?;
        self.expect_operator(Operator::RightParen, |actual| {
            ParseError::MissingRightParenInFuncDeclaration { actual }
        })?;

        let body = self.parse_block()?;

        Ok(FuncDeclaration {
            name,
            arguments,
            body,
        })
    }
}

/// Parses an eagerly lexed token vector.
pub fn parse(tokens: Vec<Token>) -> ParseResult {
    let mut parser = Parser::new(SequenceCursor::new(tokens));
    parser.parse()
}
