//! Parsing infrastructure (tree-sitter)

mod comments;
pub mod go_parser;

pub use go_parser::GoParser;
