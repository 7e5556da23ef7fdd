//! Textual lowering of an AST into shell-script syntax.

use crate::parser::ast::{Arguments, Block, FuncStatement, Node};

/// Name-mangling prefix keeping generated identifiers clear of shell
/// builtins.
pub const IDENTIFIER_PREFIX: &str = "__VDSH__";

/// Pure recursive renderer; total over well-formed trees.
pub struct CodeGenerator;

impl CodeGenerator {
    pub fn transform(&self, ast: &Node) -> String {
        self.generate(ast)
    }

    fn generate(&self, node: &Node) -> String {
        match node {
            Node::Binary { op, left, right } => format!(
                "$(({}{}{}))",
                self.generate(left),
                op.spelling(),
                self.generate(right)
            ),
            Node::Unary { op, operand } => {
                format!("$(({}{}))", op.spelling(), self.generate(operand))
            }
            Node::String(value) => format!("\"{value}\""),
            Node::Identifier(name) => format!("${IDENTIFIER_PREFIX}{name}"),
            Node::Number(value) => self.generate_number(*value),
            Node::Let(statement) => format!(
                "local {IDENTIFIER_PREFIX}{}={}",
                statement.assignment.name,
                self.generate(&statement.assignment.value)
            ),
            Node::Func(statement) => self.generate_func(statement),
            Node::Block(block) => self.generate_block(block),
        }
    }

    fn generate_number(&self, value: f64) -> String {
        // Whole values render without the trailing `.0` so the shell's
        // integer arithmetic accepts them. Formatting with zero precision
        // keeps whole values beyond the i64 range intact.
        if value.fract() == 0.0 {
            format!("{value:.0}")
        } else {
            value.to_string()
        }
    }

    /// One `local` line per positional argument, 0-based.
    fn generate_arguments(&self, arguments: &Arguments) -> String {
        let mut prologue = String::new();

        for (index, argument) in arguments.list.iter().enumerate() {
            prologue.push_str(&format!(
                "local {IDENTIFIER_PREFIX}{}=${index}\n",
                argument.name
            ));
        }

        prologue
    }

    fn generate_block(&self, block: &Block) -> String {
        let inner: Vec<String> = block
            .statements
            .iter()
            .map(|statement| self.generate(statement))
            .collect();

        format!("{{\n{}\n}}", inner.join("\n"))
    }

    fn generate_func(&self, statement: &FuncStatement) -> String {
        let declaration = &statement.declaration;
        let prologue = self.generate_arguments(&declaration.arguments);
        let body: Vec<String> = declaration
            .body
            .statements
            .iter()
            .map(|statement| self.generate(statement))
            .collect();

        format!(
            "function {IDENTIFIER_PREFIX}{}(){{\n{}{}\n}}",
            declaration.name,
            prologue,
            body.join("\n")
        )
    }
}
