pub mod error;
pub mod iter;
pub mod lexer;
pub mod parser;
pub mod pipeline;
