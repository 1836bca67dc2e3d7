use crate::core::Value;

/// Root command type
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Get(String),
    Set(String, Value),
    Del(String),
    Begin,
    Commit,
    Rollback,
    /// KEYS [value]
    Keys(Option<Value>),
    Values,
    /// COUNT [value]
    Count(Option<Value>),
    /// SHOW [max_records]; falls back to the configured limit
    Show(Option<usize>),
    Dump,
    Depth,
    Help,
    Exit,
}

impl Command {
    /// Verb as typed by users
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Get(_) => "GET",
            Command::Set(..) => "SET",
            Command::Del(_) => "DEL",
            Command::Begin => "BEGIN",
            Command::Commit => "COMMIT",
            Command::Rollback => "ROLLBACK",
            Command::Keys(_) => "KEYS",
            Command::Values => "VALUES",
            Command::Count(_) => "COUNT",
            Command::Show(_) => "SHOW",
            Command::Dump => "DUMP",
            Command::Depth => "DEPTH",
            Command::Help => "HELP",
            Command::Exit => "EXIT",
        }
    }
}
