use super::Transform;
use crate::parser::ast::Node;

/// Identity rewrite pass; placeholder for future AST rewrites.
pub struct Optimizer;

impl Transform for Optimizer {
    fn transform(&self, ast: Node) -> Node {
        ast
    }
}
