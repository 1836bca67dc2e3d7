use super::RecordTable;
use crate::core::Value;
use crate::parser::command_parser::USAGE;
use std::fmt;

/// Outcome of one executed command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Ok,
    Value(Option<Value>),
    Keys(Vec<String>),
    Values(Vec<Value>),
    Count(usize),
    Table(RecordTable),
    Json(String),
    Depth(usize),
    Help,
    Exit,
}

impl Reply {
    /// Check if the session should stop after this reply
    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit)
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ok => write!(f, "OK"),
            Reply::Value(Some(value)) => write!(f, "{}", value),
            Reply::Value(None) => write!(f, "(nil)"),
            Reply::Keys(keys) if keys.is_empty() => write!(f, "(empty)"),
            Reply::Keys(keys) => write!(f, "{}", keys.join("\n")),
            Reply::Values(values) if values.is_empty() => write!(f, "(empty)"),
            Reply::Values(values) => {
                let lines: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "{}", lines.join("\n"))
            }
            Reply::Count(n) => write!(f, "{}", n),
            Reply::Table(table) => write!(f, "{}", table),
            Reply::Json(json) => write!(f, "{}", json),
            Reply::Depth(depth) => write!(f, "{}", depth),
            Reply::Help => write!(f, "{}", USAGE),
            Reply::Exit => write!(f, "bye"),
        }
    }
}
