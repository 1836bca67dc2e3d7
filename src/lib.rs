// ============================================================================
// memokv Library
// ============================================================================

pub mod config;
pub mod core;
pub mod facade;
pub mod parser;
pub mod result;
pub mod storage;
pub mod transaction;

// Re-export main types for convenience
pub use crate::config::{CommitMode, StoreConfig};
pub use crate::core::{KvError, Result, Value};
pub use crate::facade::Session;
pub use crate::parser::{Command, CommandParser};
pub use crate::result::{RecordTable, Reply};
pub use crate::storage::{InMemoryStore, KeyValueStore};
pub use crate::transaction::{UndoLog, UndoRecord};
