pub mod ast;
pub mod command_parser;
pub mod tokenizer;

pub use ast::Command;
pub use command_parser::CommandParser;
