use crate::config::StoreConfig;
use crate::core::{Result, Value};
use crate::parser::{Command, CommandParser};
use crate::result::Reply;
use crate::storage::{InMemoryStore, KeyValueStore};
use log::debug;
use std::collections::BTreeMap;

/// Text-command front end over a single `KeyValueStore<Value>`
///
/// # Examples
///
/// ```
/// use memokv::Session;
///
/// # fn main() -> memokv::Result<()> {
/// let mut session = Session::new();
/// session.execute("SET a 10")?;
/// session.execute("BEGIN")?;
/// session.execute("SET a 20")?;
/// session.execute("ROLLBACK")?;
///
/// let reply = session.execute("GET a")?;
/// assert_eq!(reply.map(|r| r.to_string()), Some("10".to_string()));
/// # Ok(())
/// # }
/// ```
pub struct Session {
    parser: CommandParser,
    store: KeyValueStore<Value>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            parser: CommandParser::new(),
            store: KeyValueStore::with_config(config),
        }
    }

    pub fn store(&self) -> &KeyValueStore<Value> {
        &self.store
    }

    /// Parse and run one line. Blank lines and comments yield `None`.
    pub fn execute(&mut self, line: &str) -> Result<Option<Reply>> {
        match self.parser.parse(line)? {
            Some(command) => self.run(command).map(Some),
            None => Ok(None),
        }
    }

    /// Run an already parsed command
    pub fn run(&mut self, command: Command) -> Result<Reply> {
        debug!("Executing {}", command.verb());

        let reply = match command {
            Command::Get(key) => Reply::Value(self.store.get(&key).cloned()),
            Command::Set(key, value) => {
                self.store.set(&key, value);
                Reply::Ok
            }
            Command::Del(key) => {
                self.store.del(&key);
                Reply::Ok
            }
            Command::Begin => {
                self.store.begin();
                Reply::Ok
            }
            Command::Commit => {
                self.store.commit();
                Reply::Ok
            }
            Command::Rollback => {
                self.store.rollback();
                Reply::Ok
            }
            Command::Keys(with_value) => {
                let mut keys = self.store.keys(with_value.as_ref());
                keys.sort();
                Reply::Keys(keys)
            }
            Command::Values => Reply::Values(self.store.values()),
            Command::Count(with_value) => Reply::Count(self.store.count(with_value.as_ref())),
            Command::Show(limit) => {
                let limit = limit.unwrap_or(self.store.config().show_limit);
                Reply::Table(self.store.show(limit))
            }
            Command::Dump => {
                let sorted: BTreeMap<&str, &Value> = self.store.entries().collect();
                Reply::Json(serde_json::to_string_pretty(&sorted)?)
            }
            Command::Depth => Reply::Depth(self.store.begin_depth()),
            Command::Help => Reply::Help,
            Command::Exit => Reply::Exit,
        };

        Ok(reply)
    }
}
