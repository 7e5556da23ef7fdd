//! Abstract syntax tree node types.
//!
//! Nodes are built only by the parser and consumed read-only by the pipeline
//! passes; every node exclusively owns its children.

use serde::Serialize;

use crate::lexer::Operator;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    // Literals
    Number(f64),
    String(String),
    Identifier(String),

    // Operations
    Unary {
        op: Operator,
        operand: Box<Node>,
    },
    Binary {
        op: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },

    // Statements
    Let(LetStatement),
    Func(FuncStatement),
    Block(Block),
}

/// A single `name: type` entry of a function signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub name: String,
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arguments {
    pub list: Vec<Argument>,
}

/// Brace-delimited statement sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub statements: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub name: String,
    pub value: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetStatement {
    pub assignment: Assignment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuncDeclaration {
    pub name: String,
    pub arguments: Arguments,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuncStatement {
    pub declaration: FuncDeclaration,
}
