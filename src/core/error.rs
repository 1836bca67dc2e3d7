use thiserror::Error;

#[derive(Error, Debug)]
pub enum KvError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Command '{0}' expects {1}")]
    MissingArgument(String, String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, KvError>;

impl From<std::io::Error> for KvError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for KvError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
