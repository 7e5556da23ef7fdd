use super::Validate;
use crate::error::VdshError;
use crate::parser::ast::Node;

/// No-op validation pass; accepts every well-formed tree.
pub struct TypeChecker;

impl Validate for TypeChecker {
    fn validate(&self, _ast: &Node) -> Result<(), VdshError> {
        Ok(())
    }
}
