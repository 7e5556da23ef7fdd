//! The compilation pipeline: parse → optimize → type-check → generate.

pub mod code_generator;
pub mod optimizer;
pub mod type_checker;


pub use code_generator::CodeGenerator;
pub use optimizer::Optimizer;
pub use type_checker::TypeChecker;

use crate::error::VdshError;
use crate::iter::Cursor;
use crate::lexer::{tokenize, Token};
use crate::parser::{ast::Node, ParseError, Parser};

/// An AST-to-AST rewrite pass.
pub trait Transform {
    fn transform(&self, ast: Node) -> Node;
}

/// An AST validation pass.
pub trait Validate {
    fn validate(&self, ast: &Node) -> Result<(), VdshError>;
}

/// Wires the compiler stages together for a single compilation unit.
pub struct Pipeline<I, O = Optimizer, V = TypeChecker>
where
    I: Cursor<Item = Token>,
    O: Transform,
    V: Validate,
{
    parser: Parser<I>,
    optimizer: O,
    type_checker: V,
    code_generator: CodeGenerator,
}

impl<I> Pipeline<I>
where
    I: Cursor<Item = Token>,
    ParseError: From<I::Error>,
{
    pub fn new(tokens: I) -> Self {
        Self::with_passes(tokens, Optimizer, TypeChecker)
    }
}

impl<I, O, V> Pipeline<I, O, V>
where
    I: Cursor<Item = Token>,
    ParseError: From<I::Error>,
    O: Transform,
    V: Validate,
{
    pub fn with_passes(tokens: I, optimizer: O, type_checker: V) -> Self {
        Self {
            parser: Parser::new(tokens),
            optimizer,
            type_checker,
            code_generator: CodeGenerator,
        }
    }

    /// Runs the stages strictly in sequence and returns the generated
    /// shell-script text.
    pub fn run(mut self) -> Result<String, VdshError> {
        let ast = self.parser.parse()?;
        let ast = self.optimizer.transform(ast);
        self.type_checker.validate(&ast)?;
        Ok(self.code_generator.transform(&ast))
    }
}

/// Compiles source text to shell-script text in one call.
pub fn compile(source: &str) -> Result<String, VdshError> {
    Pipeline::new(tokenize(source)).run()
}
